#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentWind {
    /// Knots, never negative.
    pub speed: f64,
    /// Degrees off the bow in (-180, 180].
    pub angle: f64,
}

/// Apparent wind seen on deck: the true-wind vector minus the boat-velocity
/// vector, in a north-referenced plane with angles clockwise from north.
/// Exact cancellation is a calm, not an error.
pub fn apparent_wind(tws: f64, twd: f64, boat_speed: f64, cog: f64) -> ApparentWind {
    let twd_rad = twd.to_radians();
    let cog_rad = cog.to_radians();

    let awx = tws * twd_rad.sin() - boat_speed * cog_rad.sin();
    let awy = tws * twd_rad.cos() - boat_speed * cog_rad.cos();

    let speed = awx.hypot(awy);
    let mut angle = awx.atan2(awy).to_degrees();
    if angle > 180.0 {
        angle -= 360.0;
    }
    if angle < -180.0 {
        angle += 360.0;
    }

    ApparentWind { speed, angle }
}
