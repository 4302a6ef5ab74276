//! Enumerations referenced by message fields.

use super::EnumType;

pub static FILE: EnumType = EnumType {
    name: "file",
    values: &[
        (1, "device"),
        (2, "settings"),
        (3, "sport"),
        (4, "activity"),
        (5, "workout"),
        (6, "course"),
        (7, "schedules"),
        (9, "weight"),
        (10, "totals"),
        (11, "goals"),
        (14, "blood_pressure"),
        (15, "monitoring_a"),
        (20, "activity_summary"),
        (28, "monitoring_daily"),
        (32, "monitoring_b"),
        (34, "segment"),
        (35, "segment_list"),
        (40, "exd_configuration"),
    ],
};

pub static MANUFACTURER: EnumType = EnumType {
    name: "manufacturer",
    values: &[
        (1, "garmin"),
        (2, "zephyr"),
        (3, "dayton"),
        (4, "idt"),
        (5, "srm"),
        (6, "quarq"),
        (7, "ibike"),
        (8, "saris"),
        (9, "spark_hk"),
        (10, "tanita"),
        (11, "echowell"),
        (12, "dynastream_oem"),
        (13, "nautilus"),
        (15, "dynastream"),
        (16, "timex"),
        (17, "metrigear"),
        (18, "xelic"),
        (19, "beurer"),
        (20, "cardiosport"),
        (21, "a_and_d"),
        (23, "suunto"),
        (32, "wahoo_fitness"),
        (255, "development"),
        (260, "zwift"),
        (265, "strava"),
        (267, "bryton"),
        (294, "coros"),
    ],
};

pub static SPORT: EnumType = EnumType {
    name: "sport",
    values: &[
        (0, "generic"),
        (1, "running"),
        (2, "cycling"),
        (3, "transition"),
        (4, "fitness_equipment"),
        (5, "swimming"),
        (6, "basketball"),
        (7, "soccer"),
        (8, "tennis"),
        (9, "american_football"),
        (10, "training"),
        (11, "walking"),
        (12, "cross_country_skiing"),
        (13, "alpine_skiing"),
        (14, "snowboarding"),
        (15, "rowing"),
        (16, "mountaineering"),
        (17, "hiking"),
        (18, "multisport"),
        (19, "paddling"),
        (20, "flying"),
        (21, "e_biking"),
        (254, "all"),
    ],
};

pub static SUB_SPORT: EnumType = EnumType {
    name: "sub_sport",
    values: &[
        (0, "generic"),
        (1, "treadmill"),
        (2, "street"),
        (3, "trail"),
        (4, "track"),
        (5, "spin"),
        (6, "indoor_cycling"),
        (7, "road"),
        (8, "mountain"),
        (9, "downhill"),
        (10, "recumbent"),
        (11, "cyclocross"),
        (12, "hand_cycling"),
        (13, "track_cycling"),
        (14, "indoor_rowing"),
        (15, "elliptical"),
        (16, "stair_climbing"),
        (17, "lap_swimming"),
        (18, "open_water"),
        (254, "all"),
    ],
};

pub static ACTIVITY_TYPE: EnumType = EnumType {
    name: "activity_type",
    values: &[
        (0, "generic"),
        (1, "running"),
        (2, "cycling"),
        (3, "transition"),
        (4, "fitness_equipment"),
        (5, "swimming"),
        (6, "walking"),
        (8, "sedentary"),
        (254, "all"),
    ],
};

pub static EVENT: EnumType = EnumType {
    name: "event",
    values: &[
        (0, "timer"),
        (3, "workout"),
        (4, "workout_step"),
        (5, "power_down"),
        (6, "power_up"),
        (7, "off_course"),
        (8, "session"),
        (9, "lap"),
        (10, "course_point"),
        (11, "battery"),
        (12, "virtual_partner_pace"),
        (13, "hr_high_alert"),
        (14, "hr_low_alert"),
        (15, "speed_high_alert"),
        (16, "speed_low_alert"),
        (17, "cad_high_alert"),
        (18, "cad_low_alert"),
        (19, "power_high_alert"),
        (20, "power_low_alert"),
        (21, "recovery_hr"),
        (22, "battery_low"),
        (23, "time_duration_alert"),
        (24, "distance_duration_alert"),
        (25, "calorie_duration_alert"),
        (26, "activity"),
        (27, "fitness_equipment"),
        (28, "length"),
        (32, "user_marker"),
        (33, "sport_point"),
        (36, "calibration"),
        (42, "front_gear_change"),
        (43, "rear_gear_change"),
        (44, "rider_position_change"),
        (45, "elev_high_alert"),
        (46, "elev_low_alert"),
        (47, "comm_timeout"),
    ],
};

pub static EVENT_TYPE: EnumType = EnumType {
    name: "event_type",
    values: &[
        (0, "start"),
        (1, "stop"),
        (2, "consecutive_depreciated"),
        (3, "marker"),
        (4, "stop_all"),
        (5, "begin_depreciated"),
        (6, "end_depreciated"),
        (7, "end_all_depreciated"),
        (8, "stop_disable"),
        (9, "stop_disable_all"),
    ],
};

pub static INTENSITY: EnumType = EnumType {
    name: "intensity",
    values: &[
        (0, "active"),
        (1, "rest"),
        (2, "warmup"),
        (3, "cooldown"),
        (4, "recovery"),
        (5, "interval"),
        (6, "other"),
    ],
};

pub static LAP_TRIGGER: EnumType = EnumType {
    name: "lap_trigger",
    values: &[
        (0, "manual"),
        (1, "time"),
        (2, "distance"),
        (3, "position_start"),
        (4, "position_lap"),
        (5, "position_waypoint"),
        (6, "position_marked"),
        (7, "session_end"),
        (8, "fitness_equipment"),
    ],
};

pub static SESSION_TRIGGER: EnumType = EnumType {
    name: "session_trigger",
    values: &[
        (0, "activity_end"),
        (1, "manual"),
        (2, "auto_multi_sport"),
        (3, "fitness_equipment"),
    ],
};

pub static ACTIVITY: EnumType = EnumType {
    name: "activity",
    values: &[(0, "manual"), (1, "auto_multi_sport")],
};

pub static GENDER: EnumType = EnumType {
    name: "gender",
    values: &[(0, "female"), (1, "male")],
};

pub static BATTERY_STATUS: EnumType = EnumType {
    name: "battery_status",
    values: &[
        (1, "new"),
        (2, "good"),
        (3, "ok"),
        (4, "low"),
        (5, "critical"),
        (6, "charging"),
        (7, "unknown"),
    ],
};

pub static SOURCE_TYPE: EnumType = EnumType {
    name: "source_type",
    values: &[
        (0, "ant"),
        (1, "antplus"),
        (2, "bluetooth"),
        (3, "bluetooth_low_energy"),
        (4, "wifi"),
        (5, "local"),
    ],
};
