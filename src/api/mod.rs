pub mod stowage_config_dto;
