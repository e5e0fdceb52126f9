mod finder_configuration;
mod rule_set_config;

pub use finder_configuration::FinderConfiguration;
pub use rule_set_config::RuleSetConfig;
