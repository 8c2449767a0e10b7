pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const HALF_TURN_DEG: u16 = 180;
pub(crate) const QUARTER_TURN_DEG: u16 = HALF_TURN_DEG >> 1;

// the number of fraction digits to show for minutes and seconds by default
pub(crate) const DISPLAY_FD: usize = 3;
