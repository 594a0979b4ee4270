use crate::config::AppConfig;
use shaku::module;
use tradedir_application::aggregator::AggregatorImplParameters;
use tradedir_application::AggregatorImpl;
use tradedir_infrastructure::rate_limiting::IntervalRateLimiterParameters;
use tradedir_infrastructure::{
    default_live_sources, HttpSourceFetcher, IntervalRateLimiter, RosterSyntheticGenerator,
    SourceSettings, SystemClock,
};

module! {
    pub AppModule {
        components = [
            AggregatorImpl,
            HttpSourceFetcher,
            IntervalRateLimiter,
            RosterSyntheticGenerator,
            SystemClock
        ],
        providers = []
    }
}

pub fn create_app_module(config: &AppConfig) -> AppModule {
    let settings = SourceSettings {
        user_agent: config.user_agent.clone(),
        timeout: config.fetch_timeout(),
        ..SourceSettings::default()
    };

    AppModule::builder()
        .with_component_parameters::<AggregatorImpl>(AggregatorImplParameters {
            sources: default_live_sources(&settings),
            default_limit: config.default_limit,
        })
        .with_component_parameters::<IntervalRateLimiter>(IntervalRateLimiterParameters {
            min_interval: config.min_fetch_interval(),
            ..Default::default()
        })
        .build()
}
