mod engine;
mod json_contract;
mod layout_config;

pub use engine::{LayoutEngine, LayoutFrame};
pub use json_contract::{
    GradeName, LAYOUT_FRAME_JSON_SCHEMA_V1, LayoutFrameJsonContractV1, parse_grade_names_json,
    parse_lessons_json,
};
pub use layout_config::{DateWindow, LayoutConfig};
