//! Subcommand implementations.
//!
//! - [`machine`] - IaaS machines
//! - [`template`] - IaaS machine templates
//! - [`platform`] - application platforms
//! - [`pool`] - pools and their teams
//! - [`plan`] - resource plans and routers
//! - [`quota`] - user quotas

pub mod machine;
pub mod plan;
pub mod platform;
pub mod pool;
pub mod quota;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

use crate::manager::Registry;

/// Every command shipped by the `tsuru-admin` binary
#[must_use]
pub fn registry() -> Registry {
    Registry::new()
        .register::<machine::MachineList>()
        .register::<machine::MachineDestroy>()
        .register::<template::TemplateList>()
        .register::<template::TemplateAdd>()
        .register::<template::TemplateUpdate>()
        .register::<template::TemplateRemove>()
        .register::<platform::PlatformAdd>()
        .register::<platform::PlatformUpdate>()
        .register::<platform::PlatformRemove>()
        .register::<pool::PoolList>()
        .register::<pool::PoolAdd>()
        .register::<pool::PoolUpdate>()
        .register::<pool::PoolRemove>()
        .register::<pool::PoolTeamsAdd>()
        .register::<pool::PoolTeamsRemove>()
        .register::<plan::PlanCreate>()
        .register::<plan::PlanList>()
        .register::<plan::PlanRemove>()
        .register::<plan::RouterList>()
        .register::<quota::QuotaUpdate>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::Manager;

    #[test]
    fn test_registry_builds_valid_command_tree() {
        Manager::new("tsuru-admin", "0.1.0", registry())
            .command()
            .debug_assert();
    }

    #[test]
    fn test_registry_names_are_unique() {
        let registry = registry();
        let mut names: Vec<&str> = registry.iter().map(|entry| entry.info.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert!(registry.get("pool-add").is_some());
        assert!(registry.get("machine-destroy").is_some());
    }
}
