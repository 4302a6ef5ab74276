use super::{
    Component, FieldKind::*, FieldProfile as F, MessageProfile, TIMESTAMP_FIELD as TS, types::*,
};

const ENHANCED_ALTITUDE: &[Component] = &[Component::new(78, 16, 5.0, 500.0)];
const ENHANCED_SPEED: &[Component] = &[Component::new(73, 16, 1000.0, 0.0)];
const LAP_ENHANCED_AVG_SPEED: &[Component] = &[Component::new(110, 16, 1000.0, 0.0)];
const LAP_ENHANCED_MAX_SPEED: &[Component] = &[Component::new(111, 16, 1000.0, 0.0)];
const SESSION_ENHANCED_AVG_SPEED: &[Component] = &[Component::new(124, 16, 1000.0, 0.0)];
const SESSION_ENHANCED_MAX_SPEED: &[Component] = &[Component::new(125, 16, 1000.0, 0.0)];

pub(super) static FILE_ID: MessageProfile = MessageProfile {
    number: 0,
    name: "file_id",
    fields: &[
        F::new(0, "type", Label(&FILE), ""),
        F::new(1, "manufacturer", Label(&MANUFACTURER), ""),
        F::new(2, "product", Integer, ""),
        F::new(3, "serial_number", Integer, ""),
        F::new(4, "time_created", DateTime, "s"),
        F::new(5, "number", Integer, ""),
        F::new(8, "product_name", Text, ""),
    ],
};

pub(super) static USER_PROFILE: MessageProfile = MessageProfile {
    number: 3,
    name: "user_profile",
    fields: &[
        F::new(254, "message_index", Integer, ""),
        F::new(0, "friendly_name", Text, ""),
        F::new(1, "gender", Label(&GENDER), ""),
        F::new(2, "age", Integer, "years"),
        F::new(3, "height", Integer, "m").scaled(100.0, 0.0),
        F::new(4, "weight", Integer, "kg").scaled(10.0, 0.0),
        F::new(8, "resting_heart_rate", Integer, "bpm"),
        F::new(9, "default_max_running_heart_rate", Integer, "bpm"),
        F::new(10, "default_max_biking_heart_rate", Integer, "bpm"),
        F::new(11, "default_max_heart_rate", Integer, "bpm"),
    ],
};

pub(super) static HR_ZONE: MessageProfile = MessageProfile {
    number: 8,
    name: "hr_zone",
    fields: &[
        F::new(254, "message_index", Integer, ""),
        F::new(1, "high_bpm", Integer, "bpm"),
        F::new(2, "name", Text, ""),
    ],
};

pub(super) static SPORT: MessageProfile = MessageProfile {
    number: 12,
    name: "sport",
    fields: &[
        F::new(0, "sport", Label(&super::types::SPORT), ""),
        F::new(1, "sub_sport", Label(&SUB_SPORT), ""),
        F::new(3, "name", Text, ""),
    ],
};

pub(super) static SESSION: MessageProfile = MessageProfile {
    number: 18,
    name: "session",
    fields: &[
        F::new(254, "message_index", Integer, ""),
        F::new(TS, "timestamp", DateTime, "s"),
        F::new(0, "event", Label(&super::types::EVENT), ""),
        F::new(1, "event_type", Label(&EVENT_TYPE), ""),
        F::new(2, "start_time", DateTime, "s"),
        F::new(3, "start_position_lat", Integer, "semicircles"),
        F::new(4, "start_position_long", Integer, "semicircles"),
        F::new(5, "sport", Label(&super::types::SPORT), ""),
        F::new(6, "sub_sport", Label(&SUB_SPORT), ""),
        F::new(7, "total_elapsed_time", Integer, "s").scaled(1000.0, 0.0),
        F::new(8, "total_timer_time", Integer, "s").scaled(1000.0, 0.0),
        F::new(9, "total_distance", Integer, "m").scaled(100.0, 0.0),
        F::new(10, "total_cycles", Integer, "cycles"),
        F::new(11, "total_calories", Integer, "kcal"),
        F::new(14, "avg_speed", Integer, "m/s")
            .scaled(1000.0, 0.0)
            .with_components(SESSION_ENHANCED_AVG_SPEED),
        F::new(15, "max_speed", Integer, "m/s")
            .scaled(1000.0, 0.0)
            .with_components(SESSION_ENHANCED_MAX_SPEED),
        F::new(16, "avg_heart_rate", Integer, "bpm"),
        F::new(17, "max_heart_rate", Integer, "bpm"),
        F::new(18, "avg_cadence", Integer, "rpm"),
        F::new(19, "max_cadence", Integer, "rpm"),
        F::new(20, "avg_power", Integer, "watts"),
        F::new(21, "max_power", Integer, "watts"),
        F::new(22, "total_ascent", Integer, "m"),
        F::new(23, "total_descent", Integer, "m"),
        F::new(25, "first_lap_index", Integer, ""),
        F::new(26, "num_laps", Integer, ""),
        F::new(28, "trigger", Label(&SESSION_TRIGGER), ""),
        F::new(29, "nec_lat", Integer, "semicircles"),
        F::new(30, "nec_long", Integer, "semicircles"),
        F::new(31, "swc_lat", Integer, "semicircles"),
        F::new(32, "swc_long", Integer, "semicircles"),
        F::new(124, "enhanced_avg_speed", Integer, "m/s").scaled(1000.0, 0.0),
        F::new(125, "enhanced_max_speed", Integer, "m/s").scaled(1000.0, 0.0),
    ],
};

pub(super) static LAP: MessageProfile = MessageProfile {
    number: 19,
    name: "lap",
    fields: &[
        F::new(254, "message_index", Integer, ""),
        F::new(TS, "timestamp", DateTime, "s"),
        F::new(0, "event", Label(&super::types::EVENT), ""),
        F::new(1, "event_type", Label(&EVENT_TYPE), ""),
        F::new(2, "start_time", DateTime, "s"),
        F::new(3, "start_position_lat", Integer, "semicircles"),
        F::new(4, "start_position_long", Integer, "semicircles"),
        F::new(5, "end_position_lat", Integer, "semicircles"),
        F::new(6, "end_position_long", Integer, "semicircles"),
        F::new(7, "total_elapsed_time", Integer, "s").scaled(1000.0, 0.0),
        F::new(8, "total_timer_time", Integer, "s").scaled(1000.0, 0.0),
        F::new(9, "total_distance", Integer, "m").scaled(100.0, 0.0),
        F::new(10, "total_cycles", Integer, "cycles"),
        F::new(11, "total_calories", Integer, "kcal"),
        F::new(13, "avg_speed", Integer, "m/s")
            .scaled(1000.0, 0.0)
            .with_components(LAP_ENHANCED_AVG_SPEED),
        F::new(14, "max_speed", Integer, "m/s")
            .scaled(1000.0, 0.0)
            .with_components(LAP_ENHANCED_MAX_SPEED),
        F::new(15, "avg_heart_rate", Integer, "bpm"),
        F::new(16, "max_heart_rate", Integer, "bpm"),
        F::new(17, "avg_cadence", Integer, "rpm"),
        F::new(18, "max_cadence", Integer, "rpm"),
        F::new(19, "avg_power", Integer, "watts"),
        F::new(20, "max_power", Integer, "watts"),
        F::new(21, "total_ascent", Integer, "m"),
        F::new(22, "total_descent", Integer, "m"),
        F::new(23, "intensity", Label(&INTENSITY), ""),
        F::new(24, "lap_trigger", Label(&LAP_TRIGGER), ""),
        F::new(25, "sport", Label(&super::types::SPORT), ""),
        F::new(39, "sub_sport", Label(&SUB_SPORT), ""),
        F::new(110, "enhanced_avg_speed", Integer, "m/s").scaled(1000.0, 0.0),
        F::new(111, "enhanced_max_speed", Integer, "m/s").scaled(1000.0, 0.0),
    ],
};

pub(super) static RECORD: MessageProfile = MessageProfile {
    number: 20,
    name: "record",
    fields: &[
        F::new(TS, "timestamp", DateTime, "s"),
        F::new(0, "position_lat", Integer, "semicircles"),
        F::new(1, "position_long", Integer, "semicircles"),
        F::new(2, "altitude", Integer, "m")
            .scaled(5.0, 500.0)
            .with_components(ENHANCED_ALTITUDE),
        F::new(3, "heart_rate", Integer, "bpm"),
        F::new(4, "cadence", Integer, "rpm"),
        F::new(5, "distance", Integer, "m").scaled(100.0, 0.0),
        F::new(6, "speed", Integer, "m/s")
            .scaled(1000.0, 0.0)
            .with_components(ENHANCED_SPEED),
        F::new(7, "power", Integer, "watts"),
        F::new(9, "grade", Integer, "%").scaled(100.0, 0.0),
        F::new(11, "time_from_course", Integer, "s").scaled(1000.0, 0.0),
        F::new(13, "temperature", Integer, "C"),
        F::new(29, "accumulated_power", Integer, "watts"),
        F::new(30, "left_right_balance", Integer, ""),
        F::new(31, "gps_accuracy", Integer, "m"),
        F::new(32, "vertical_speed", Integer, "m/s").scaled(1000.0, 0.0),
        F::new(33, "calories", Integer, "kcal"),
        F::new(39, "vertical_oscillation", Integer, "mm").scaled(10.0, 0.0),
        F::new(40, "stance_time_percent", Integer, "percent").scaled(100.0, 0.0),
        F::new(41, "stance_time", Integer, "ms").scaled(10.0, 0.0),
        F::new(42, "activity_type", Label(&ACTIVITY_TYPE), ""),
        F::new(53, "fractional_cadence", Integer, "rpm").scaled(128.0, 0.0),
        F::new(73, "enhanced_speed", Integer, "m/s").scaled(1000.0, 0.0),
        F::new(78, "enhanced_altitude", Integer, "m").scaled(5.0, 500.0),
        F::new(83, "vertical_ratio", Integer, "percent").scaled(100.0, 0.0),
        F::new(85, "step_length", Integer, "mm").scaled(10.0, 0.0),
    ],
};

pub(super) static EVENT: MessageProfile = MessageProfile {
    number: 21,
    name: "event",
    fields: &[
        F::new(TS, "timestamp", DateTime, "s"),
        F::new(0, "event", Label(&super::types::EVENT), ""),
        F::new(1, "event_type", Label(&EVENT_TYPE), ""),
        F::new(2, "data16", Integer, ""),
        F::new(3, "data", Integer, ""),
        F::new(4, "event_group", Integer, ""),
    ],
};

pub(super) static DEVICE_INFO: MessageProfile = MessageProfile {
    number: 23,
    name: "device_info",
    fields: &[
        F::new(TS, "timestamp", DateTime, "s"),
        F::new(0, "device_index", Integer, ""),
        F::new(1, "device_type", Integer, ""),
        F::new(2, "manufacturer", Label(&MANUFACTURER), ""),
        F::new(3, "serial_number", Integer, ""),
        F::new(4, "product", Integer, ""),
        F::new(5, "software_version", Integer, "").scaled(100.0, 0.0),
        F::new(6, "hardware_version", Integer, ""),
        F::new(7, "cum_operating_time", Integer, "s"),
        F::new(10, "battery_voltage", Integer, "V").scaled(256.0, 0.0),
        F::new(11, "battery_status", Label(&BATTERY_STATUS), ""),
        F::new(19, "descriptor", Text, ""),
        F::new(25, "source_type", Label(&SOURCE_TYPE), ""),
        F::new(27, "product_name", Text, ""),
    ],
};

pub(super) static ACTIVITY: MessageProfile = MessageProfile {
    number: 34,
    name: "activity",
    fields: &[
        F::new(TS, "timestamp", DateTime, "s"),
        F::new(0, "total_timer_time", Integer, "s").scaled(1000.0, 0.0),
        F::new(1, "num_sessions", Integer, ""),
        F::new(2, "type", Label(&super::types::ACTIVITY), ""),
        F::new(3, "event", Label(&super::types::EVENT), ""),
        F::new(4, "event_type", Label(&EVENT_TYPE), ""),
        F::new(5, "local_timestamp", DateTime, "s"),
        F::new(6, "event_group", Integer, ""),
    ],
};

pub(super) static FILE_CREATOR: MessageProfile = MessageProfile {
    number: 49,
    name: "file_creator",
    fields: &[
        F::new(0, "software_version", Integer, ""),
        F::new(1, "hardware_version", Integer, ""),
    ],
};

pub(super) static HRV: MessageProfile = MessageProfile {
    number: 78,
    name: "hrv",
    fields: &[F::new(0, "time", Integer, "s").scaled(1000.0, 0.0)],
};

pub(super) static FIELD_DESCRIPTION: MessageProfile = MessageProfile {
    number: 206,
    name: "field_description",
    fields: &[
        F::new(0, "developer_data_index", Integer, ""),
        F::new(1, "field_definition_number", Integer, ""),
        F::new(2, "fit_base_type_id", Integer, ""),
        F::new(3, "field_name", Text, ""),
        F::new(4, "array", Integer, ""),
        F::new(5, "components", Text, ""),
        F::new(6, "scale", Integer, ""),
        F::new(7, "offset", Integer, ""),
        F::new(8, "units", Text, ""),
        F::new(9, "bits", Text, ""),
        F::new(10, "accumulate", Text, ""),
        F::new(13, "fit_base_unit_id", Integer, ""),
        F::new(14, "native_mesg_num", Integer, ""),
        F::new(15, "native_field_num", Integer, ""),
    ],
};

pub(super) static DEVELOPER_DATA_ID: MessageProfile = MessageProfile {
    number: 207,
    name: "developer_data_id",
    fields: &[
        F::new(0, "developer_id", Integer, ""),
        F::new(1, "application_id", Integer, ""),
        F::new(2, "manufacturer_id", Label(&MANUFACTURER), ""),
        F::new(3, "developer_data_index", Integer, ""),
        F::new(4, "application_version", Integer, ""),
    ],
};
