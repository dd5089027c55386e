//! CodeDeploy operations

use crate::error::{WireError, WireResult};

use std::fmt;
use std::str::FromStr;

use heck::ToUpperCamelCase;

macro_rules! operations {
    ($($variant:ident => $snake:literal,)+) => {
        /// A CodeDeploy API operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum Operation {
            $($variant,)+
        }

        impl Operation {
            /// Every operation, in alphabetical order
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)+];

            /// PascalCase name used in the routing header
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => stringify!($variant),)+
                }
            }

            /// snake_case name used by callers
            #[must_use]
            pub const fn snake_name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $snake,)+
                }
            }
        }
    };
}

operations! {
    AddTagsToOnPremisesInstances => "add_tags_to_on_premises_instances",
    BatchGetApplicationRevisions => "batch_get_application_revisions",
    BatchGetApplications => "batch_get_applications",
    BatchGetDeploymentGroups => "batch_get_deployment_groups",
    BatchGetDeploymentInstances => "batch_get_deployment_instances",
    BatchGetDeploymentTargets => "batch_get_deployment_targets",
    BatchGetDeployments => "batch_get_deployments",
    BatchGetOnPremisesInstances => "batch_get_on_premises_instances",
    ContinueDeployment => "continue_deployment",
    CreateApplication => "create_application",
    CreateDeployment => "create_deployment",
    CreateDeploymentConfig => "create_deployment_config",
    CreateDeploymentGroup => "create_deployment_group",
    DeleteApplication => "delete_application",
    DeleteDeploymentConfig => "delete_deployment_config",
    DeleteDeploymentGroup => "delete_deployment_group",
    DeleteGitHubAccountToken => "delete_git_hub_account_token",
    DeleteResourcesByExternalId => "delete_resources_by_external_id",
    DeregisterOnPremisesInstance => "deregister_on_premises_instance",
    GetApplication => "get_application",
    GetApplicationRevision => "get_application_revision",
    GetDeployment => "get_deployment",
    GetDeploymentConfig => "get_deployment_config",
    GetDeploymentGroup => "get_deployment_group",
    GetDeploymentInstance => "get_deployment_instance",
    GetDeploymentTarget => "get_deployment_target",
    GetOnPremisesInstance => "get_on_premises_instance",
    ListApplicationRevisions => "list_application_revisions",
    ListApplications => "list_applications",
    ListDeploymentConfigs => "list_deployment_configs",
    ListDeploymentGroups => "list_deployment_groups",
    ListDeploymentInstances => "list_deployment_instances",
    ListDeploymentTargets => "list_deployment_targets",
    ListDeployments => "list_deployments",
    ListGitHubAccountTokenNames => "list_git_hub_account_token_names",
    ListOnPremisesInstances => "list_on_premises_instances",
    ListTagsForResource => "list_tags_for_resource",
    PutLifecycleEventHookExecutionStatus => "put_lifecycle_event_hook_execution_status",
    RegisterApplicationRevision => "register_application_revision",
    RegisterOnPremisesInstance => "register_on_premises_instance",
    RemoveTagsFromOnPremisesInstances => "remove_tags_from_on_premises_instances",
    SkipWaitTimeForInstanceTermination => "skip_wait_time_for_instance_termination",
    StopDeployment => "stop_deployment",
    TagResource => "tag_resource",
    UntagResource => "untag_resource",
    UpdateApplication => "update_application",
    UpdateDeploymentGroup => "update_deployment_group",
}

impl Operation {
    /// Looks up an operation by its PascalCase or snake_case name.
    ///
    /// # Errors
    /// Returns [`WireError::UnknownOperation`] if no operation matches.
    ///
    /// # Examples
    /// ```
    /// # use codedeploy_wire::Operation;
    /// assert_eq!(Operation::from_name("CreateApplication").unwrap(), Operation::CreateApplication);
    /// assert_eq!(Operation::from_name("create_application").unwrap(), Operation::CreateApplication);
    /// assert!(Operation::from_name("create_bucket").is_err());
    /// ```
    pub fn from_name(name: &str) -> WireResult<Self> {
        let pascal = name.to_upper_camel_case();
        Self::ALL
            .binary_search_by(|op| op.name().cmp(pascal.as_str()))
            .map(|idx| Self::ALL[idx])
            .map_err(|_| WireError::UnknownOperation { name: name.to_owned() })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
