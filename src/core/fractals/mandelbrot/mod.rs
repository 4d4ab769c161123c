pub mod escape_time;
pub mod hsv_colour_map;
