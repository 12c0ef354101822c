pub mod json_api;

mod config_env;

pub use json_api::{
    assign_lineup_json, assign_lineup_json_with, assign_lineup_request, LineupRequest,
    LineupResponse,
};
