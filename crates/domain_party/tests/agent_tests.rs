//! Tests for domain_party

use core_kernel::{AgentId, HealthCheckable, PortError};
use domain_party::{AgentProfile, DayPeriod, PartyError, ProfileProvider, StaticProfileProvider};

mod profile_tests {
    use super::*;

    #[test]
    fn test_profile_new_trims_name() {
        let agent = AgentProfile::new("  Sarah Chen ", "Adjuster").unwrap();
        assert_eq!(agent.display_name, "Sarah Chen");
        assert_eq!(agent.first_name(), "Sarah");
        assert!(agent.specialty.is_none());
    }

    #[test]
    fn test_profile_rejects_blank_name() {
        let err = AgentProfile::new("   ", "Adjuster").unwrap_err();
        assert!(matches!(err, PartyError::InvalidProfile(_)));
    }

    #[test]
    fn test_day_period_boundaries() {
        assert_eq!(DayPeriod::from_hour(0), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(11), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(17), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(18), DayPeriod::Evening);
        assert_eq!(DayPeriod::from_hour(23), DayPeriod::Evening);
    }

    #[test]
    fn test_greeting_at() {
        let agent = AgentProfile::new("Sarah Chen", "Adjuster").unwrap();
        assert_eq!(agent.greeting_at(8), "Good morning, Sarah");
        assert_eq!(agent.greeting_at(14), "Good afternoon, Sarah");
        assert_eq!(agent.greeting_at(20), "Good evening, Sarah");
    }

    #[test]
    fn test_single_word_name() {
        let agent = AgentProfile::new("Morgan", "Adjuster").unwrap();
        assert_eq!(agent.greeting_at(9), "Good morning, Morgan");
    }

    #[test]
    fn test_profile_serialization() {
        let agent = AgentProfile::new("Sarah Chen", "Adjuster")
            .unwrap()
            .with_specialty("Commercial property");
        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["display_name"], "Sarah Chen");
        assert_eq!(json["specialty"], "Commercial property");

        let back: AgentProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, agent);
    }
}

mod provider_tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_serves_profile() {
        let provider = StaticProfileProvider::from_config("Sarah Chen", "Adjuster").unwrap();
        let agent = provider.current_agent().await.unwrap();
        assert_eq!(agent.display_name, "Sarah Chen");

        let found = provider.find_agent(agent.agent_id).await.unwrap();
        assert_eq!(found, agent);
    }

    #[tokio::test]
    async fn test_static_provider_unknown_agent() {
        let provider = StaticProfileProvider::from_config("Sarah Chen", "Adjuster").unwrap();
        let err = provider.find_agent(AgentId::new()).await.unwrap_err();
        assert!(matches!(err, PortError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_static_provider_replace() {
        let provider = StaticProfileProvider::from_config("Sarah Chen", "Adjuster").unwrap();
        let next = AgentProfile::new("Priya Nair", "Team Lead").unwrap();

        let previous = provider.replace(next.clone()).await;

        assert_eq!(previous.display_name, "Sarah Chen");
        assert_eq!(provider.current_agent().await.unwrap(), next);
    }

    #[tokio::test]
    async fn test_static_provider_is_healthy() {
        let provider = StaticProfileProvider::from_config("Sarah Chen", "Adjuster").unwrap();
        assert!(provider.health_check().await.is_operational());
    }

    #[test]
    fn test_from_config_rejects_blank_name() {
        assert!(StaticProfileProvider::from_config("", "Adjuster").is_err());
    }
}
