/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct AddTagsOutput {
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl AddTagsOutput {
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`AddTagsOutput`](crate::output::AddTagsOutput)
pub mod add_tags_output {
    /// A builder for [`AddTagsOutput`](crate::output::AddTagsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        /// Appends an item to `Tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`AddTagsOutput`](crate::output::AddTagsOutput)
        pub fn build(self) -> crate::output::AddTagsOutput {
            crate::output::AddTagsOutput {
                tags: self.tags,
            }
        }
    }
}
impl AddTagsOutput {
    /// Creates a new builder-style object to manufacture [`AddTagsOutput`](crate::output::AddTagsOutput)
    pub fn builder() -> crate::output::add_tags_output::Builder {
        crate::output::add_tags_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteTagsOutput {}
/// See [`DeleteTagsOutput`](crate::output::DeleteTagsOutput)
pub mod delete_tags_output {
    /// A builder for [`DeleteTagsOutput`](crate::output::DeleteTagsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteTagsOutput`](crate::output::DeleteTagsOutput)
        pub fn build(self) -> crate::output::DeleteTagsOutput {
            crate::output::DeleteTagsOutput {}
        }
    }
}
impl DeleteTagsOutput {
    /// Creates a new builder-style object to manufacture [`DeleteTagsOutput`](crate::output::DeleteTagsOutput)
    pub fn builder() -> crate::output::delete_tags_output::Builder {
        crate::output::delete_tags_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTagsOutput {
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTagsOutput {
    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListTagsOutput`](crate::output::ListTagsOutput)
pub mod list_tags_output {
    /// A builder for [`ListTagsOutput`](crate::output::ListTagsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `Tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsOutput`](crate::output::ListTagsOutput)
        pub fn build(self) -> crate::output::ListTagsOutput {
            crate::output::ListTagsOutput {
                tags: self.tags,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTagsOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsOutput`](crate::output::ListTagsOutput)
    pub fn builder() -> crate::output::list_tags_output::Builder {
        crate::output::list_tags_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateNotebookInstanceOutput {
    #[serde(rename = "NotebookInstanceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_arn: std::option::Option<std::string::String>,
}
impl CreateNotebookInstanceOutput {
    pub fn notebook_instance_arn(&self) -> std::option::Option<&str> {
        self.notebook_instance_arn.as_deref()
    }
}
/// See [`CreateNotebookInstanceOutput`](crate::output::CreateNotebookInstanceOutput)
pub mod create_notebook_instance_output {
    /// A builder for [`CreateNotebookInstanceOutput`](crate::output::CreateNotebookInstanceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn notebook_instance_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_arn = Some(input.into());
            self
        }
        pub fn set_notebook_instance_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateNotebookInstanceOutput`](crate::output::CreateNotebookInstanceOutput)
        pub fn build(self) -> crate::output::CreateNotebookInstanceOutput {
            crate::output::CreateNotebookInstanceOutput {
                notebook_instance_arn: self.notebook_instance_arn,
            }
        }
    }
}
impl CreateNotebookInstanceOutput {
    /// Creates a new builder-style object to manufacture [`CreateNotebookInstanceOutput`](crate::output::CreateNotebookInstanceOutput)
    pub fn builder() -> crate::output::create_notebook_instance_output::Builder {
        crate::output::create_notebook_instance_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeNotebookInstanceOutput {
    #[serde(rename = "NotebookInstanceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_arn: std::option::Option<std::string::String>,
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
    #[serde(rename = "NotebookInstanceStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_status: std::option::Option<crate::model::NotebookInstanceStatus>,
    /// If status is `Failed`, the reason it failed.
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    /// The URL used to connect to the Jupyter notebook running in the instance.
    #[serde(rename = "Url")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub url: std::option::Option<std::string::String>,
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    #[serde(rename = "SubnetId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<std::string::String>,
    #[serde(rename = "SecurityGroups")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    /// KMS key used to encrypt the ML storage volume attached to the instance.
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "NetworkInterfaceId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<std::string::String>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "NotebookInstanceLifecycleConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_lifecycle_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "DirectInternetAccess")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub direct_internet_access: std::option::Option<crate::model::DirectInternetAccess>,
    /// Size, in GB, of the ML storage volume attached to the instance.
    #[serde(rename = "VolumeSizeInGB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_gb: std::option::Option<i32>,
    #[serde(rename = "AcceleratorTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_types: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>,
    #[serde(rename = "DefaultCodeRepository")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_code_repository: std::option::Option<std::string::String>,
    #[serde(rename = "AdditionalCodeRepositories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
    /// Whether root access is enabled for users of the notebook instance.
    #[serde(rename = "RootAccess")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub root_access: std::option::Option<crate::model::RootAccess>,
}
impl DescribeNotebookInstanceOutput {
    pub fn notebook_instance_arn(&self) -> std::option::Option<&str> {
        self.notebook_instance_arn.as_deref()
    }

    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }

    pub fn notebook_instance_status(&self) -> std::option::Option<&crate::model::NotebookInstanceStatus> {
        self.notebook_instance_status.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn url(&self) -> std::option::Option<&str> {
        self.url.as_deref()
    }

    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    pub fn security_groups(&self) -> std::option::Option<&[std::string::String]> {
        self.security_groups.as_deref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn network_interface_id(&self) -> std::option::Option<&str> {
        self.network_interface_id.as_deref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn notebook_instance_lifecycle_config_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_lifecycle_config_name.as_deref()
    }

    pub fn direct_internet_access(&self) -> std::option::Option<&crate::model::DirectInternetAccess> {
        self.direct_internet_access.as_ref()
    }

    pub fn volume_size_in_gb(&self) -> std::option::Option<i32> {
        self.volume_size_in_gb
    }

    pub fn accelerator_types(&self) -> std::option::Option<&[crate::model::NotebookInstanceAcceleratorType]> {
        self.accelerator_types.as_deref()
    }

    pub fn default_code_repository(&self) -> std::option::Option<&str> {
        self.default_code_repository.as_deref()
    }

    pub fn additional_code_repositories(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_code_repositories.as_deref()
    }

    pub fn root_access(&self) -> std::option::Option<&crate::model::RootAccess> {
        self.root_access.as_ref()
    }
}
/// See [`DescribeNotebookInstanceOutput`](crate::output::DescribeNotebookInstanceOutput)
pub mod describe_notebook_instance_output {
    /// A builder for [`DescribeNotebookInstanceOutput`](crate::output::DescribeNotebookInstanceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_arn: std::option::Option<std::string::String>,
        notebook_instance_name: std::option::Option<std::string::String>,
        notebook_instance_status: std::option::Option<crate::model::NotebookInstanceStatus>,
        failure_reason: std::option::Option<std::string::String>,
        url: std::option::Option<std::string::String>,
        instance_type: std::option::Option<crate::model::InstanceType>,
        subnet_id: std::option::Option<std::string::String>,
        security_groups: std::option::Option<std::vec::Vec<std::string::String>>,
        role_arn: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
        network_interface_id: std::option::Option<std::string::String>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        creation_time: std::option::Option<smithy_types::Instant>,
        notebook_instance_lifecycle_config_name: std::option::Option<std::string::String>,
        direct_internet_access: std::option::Option<crate::model::DirectInternetAccess>,
        volume_size_in_gb: std::option::Option<i32>,
        accelerator_types: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>,
        default_code_repository: std::option::Option<std::string::String>,
        additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
        root_access: std::option::Option<crate::model::RootAccess>,
    }
    impl Builder {
        pub fn notebook_instance_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_arn = Some(input.into());
            self
        }
        pub fn set_notebook_instance_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_arn = input;
            self
        }
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        pub fn notebook_instance_status(mut self, input: crate::model::NotebookInstanceStatus) -> Self {
            self.notebook_instance_status = Some(input);
            self
        }
        pub fn set_notebook_instance_status(mut self, input: std::option::Option<crate::model::NotebookInstanceStatus>) -> Self {
            self.notebook_instance_status = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        pub fn instance_type(mut self, input: crate::model::InstanceType) -> Self {
            self.instance_type = Some(input);
            self
        }
        pub fn set_instance_type(mut self, input: std::option::Option<crate::model::InstanceType>) -> Self {
            self.instance_type = input;
            self
        }
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }
        /// Appends an item to `SecurityGroups`.
        ///
        /// To override the contents of this collection use [`set_security_groups`](Self::set_security_groups).
        pub fn security_groups(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.security_groups.unwrap_or_default();
            v.push(input.into());
            self.security_groups = Some(v);
            self
        }
        pub fn set_security_groups(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_groups = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn notebook_instance_lifecycle_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_lifecycle_config_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_lifecycle_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_lifecycle_config_name = input;
            self
        }
        pub fn direct_internet_access(mut self, input: crate::model::DirectInternetAccess) -> Self {
            self.direct_internet_access = Some(input);
            self
        }
        pub fn set_direct_internet_access(mut self, input: std::option::Option<crate::model::DirectInternetAccess>) -> Self {
            self.direct_internet_access = input;
            self
        }
        pub fn volume_size_in_gb(mut self, input: i32) -> Self {
            self.volume_size_in_gb = Some(input);
            self
        }
        pub fn set_volume_size_in_gb(mut self, input: std::option::Option<i32>) -> Self {
            self.volume_size_in_gb = input;
            self
        }
        /// Appends an item to `AcceleratorTypes`.
        ///
        /// To override the contents of this collection use [`set_accelerator_types`](Self::set_accelerator_types).
        pub fn accelerator_types(mut self, input: impl Into<crate::model::NotebookInstanceAcceleratorType>) -> Self {
            let mut v = self.accelerator_types.unwrap_or_default();
            v.push(input.into());
            self.accelerator_types = Some(v);
            self
        }
        pub fn set_accelerator_types(mut self, input: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>) -> Self {
            self.accelerator_types = input;
            self
        }
        pub fn default_code_repository(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_code_repository = Some(input.into());
            self
        }
        pub fn set_default_code_repository(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_code_repository = input;
            self
        }
        /// Appends an item to `AdditionalCodeRepositories`.
        ///
        /// To override the contents of this collection use [`set_additional_code_repositories`](Self::set_additional_code_repositories).
        pub fn additional_code_repositories(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.additional_code_repositories.unwrap_or_default();
            v.push(input.into());
            self.additional_code_repositories = Some(v);
            self
        }
        pub fn set_additional_code_repositories(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.additional_code_repositories = input;
            self
        }
        pub fn root_access(mut self, input: crate::model::RootAccess) -> Self {
            self.root_access = Some(input);
            self
        }
        pub fn set_root_access(mut self, input: std::option::Option<crate::model::RootAccess>) -> Self {
            self.root_access = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeNotebookInstanceOutput`](crate::output::DescribeNotebookInstanceOutput)
        pub fn build(self) -> crate::output::DescribeNotebookInstanceOutput {
            crate::output::DescribeNotebookInstanceOutput {
                notebook_instance_arn: self.notebook_instance_arn,
                notebook_instance_name: self.notebook_instance_name,
                notebook_instance_status: self.notebook_instance_status,
                failure_reason: self.failure_reason,
                url: self.url,
                instance_type: self.instance_type,
                subnet_id: self.subnet_id,
                security_groups: self.security_groups,
                role_arn: self.role_arn,
                kms_key_id: self.kms_key_id,
                network_interface_id: self.network_interface_id,
                last_modified_time: self.last_modified_time,
                creation_time: self.creation_time,
                notebook_instance_lifecycle_config_name: self.notebook_instance_lifecycle_config_name,
                direct_internet_access: self.direct_internet_access,
                volume_size_in_gb: self.volume_size_in_gb,
                accelerator_types: self.accelerator_types,
                default_code_repository: self.default_code_repository,
                additional_code_repositories: self.additional_code_repositories,
                root_access: self.root_access,
            }
        }
    }
}
impl DescribeNotebookInstanceOutput {
    /// Creates a new builder-style object to manufacture [`DescribeNotebookInstanceOutput`](crate::output::DescribeNotebookInstanceOutput)
    pub fn builder() -> crate::output::describe_notebook_instance_output::Builder {
        crate::output::describe_notebook_instance_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UpdateNotebookInstanceOutput {}
/// See [`UpdateNotebookInstanceOutput`](crate::output::UpdateNotebookInstanceOutput)
pub mod update_notebook_instance_output {
    /// A builder for [`UpdateNotebookInstanceOutput`](crate::output::UpdateNotebookInstanceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateNotebookInstanceOutput`](crate::output::UpdateNotebookInstanceOutput)
        pub fn build(self) -> crate::output::UpdateNotebookInstanceOutput {
            crate::output::UpdateNotebookInstanceOutput {}
        }
    }
}
impl UpdateNotebookInstanceOutput {
    /// Creates a new builder-style object to manufacture [`UpdateNotebookInstanceOutput`](crate::output::UpdateNotebookInstanceOutput)
    pub fn builder() -> crate::output::update_notebook_instance_output::Builder {
        crate::output::update_notebook_instance_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteNotebookInstanceOutput {}
/// See [`DeleteNotebookInstanceOutput`](crate::output::DeleteNotebookInstanceOutput)
pub mod delete_notebook_instance_output {
    /// A builder for [`DeleteNotebookInstanceOutput`](crate::output::DeleteNotebookInstanceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteNotebookInstanceOutput`](crate::output::DeleteNotebookInstanceOutput)
        pub fn build(self) -> crate::output::DeleteNotebookInstanceOutput {
            crate::output::DeleteNotebookInstanceOutput {}
        }
    }
}
impl DeleteNotebookInstanceOutput {
    /// Creates a new builder-style object to manufacture [`DeleteNotebookInstanceOutput`](crate::output::DeleteNotebookInstanceOutput)
    pub fn builder() -> crate::output::delete_notebook_instance_output::Builder {
        crate::output::delete_notebook_instance_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StartNotebookInstanceOutput {}
/// See [`StartNotebookInstanceOutput`](crate::output::StartNotebookInstanceOutput)
pub mod start_notebook_instance_output {
    /// A builder for [`StartNotebookInstanceOutput`](crate::output::StartNotebookInstanceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StartNotebookInstanceOutput`](crate::output::StartNotebookInstanceOutput)
        pub fn build(self) -> crate::output::StartNotebookInstanceOutput {
            crate::output::StartNotebookInstanceOutput {}
        }
    }
}
impl StartNotebookInstanceOutput {
    /// Creates a new builder-style object to manufacture [`StartNotebookInstanceOutput`](crate::output::StartNotebookInstanceOutput)
    pub fn builder() -> crate::output::start_notebook_instance_output::Builder {
        crate::output::start_notebook_instance_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopNotebookInstanceOutput {}
/// See [`StopNotebookInstanceOutput`](crate::output::StopNotebookInstanceOutput)
pub mod stop_notebook_instance_output {
    /// A builder for [`StopNotebookInstanceOutput`](crate::output::StopNotebookInstanceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StopNotebookInstanceOutput`](crate::output::StopNotebookInstanceOutput)
        pub fn build(self) -> crate::output::StopNotebookInstanceOutput {
            crate::output::StopNotebookInstanceOutput {}
        }
    }
}
impl StopNotebookInstanceOutput {
    /// Creates a new builder-style object to manufacture [`StopNotebookInstanceOutput`](crate::output::StopNotebookInstanceOutput)
    pub fn builder() -> crate::output::stop_notebook_instance_output::Builder {
        crate::output::stop_notebook_instance_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListNotebookInstancesOutput {
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "NotebookInstances")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instances: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceSummary>>,
}
impl ListNotebookInstancesOutput {
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn notebook_instances(&self) -> std::option::Option<&[crate::model::NotebookInstanceSummary]> {
        self.notebook_instances.as_deref()
    }
}
/// See [`ListNotebookInstancesOutput`](crate::output::ListNotebookInstancesOutput)
pub mod list_notebook_instances_output {
    /// A builder for [`ListNotebookInstancesOutput`](crate::output::ListNotebookInstancesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        notebook_instances: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceSummary>>,
    }
    impl Builder {
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Appends an item to `NotebookInstances`.
        ///
        /// To override the contents of this collection use [`set_notebook_instances`](Self::set_notebook_instances).
        pub fn notebook_instances(mut self, input: impl Into<crate::model::NotebookInstanceSummary>) -> Self {
            let mut v = self.notebook_instances.unwrap_or_default();
            v.push(input.into());
            self.notebook_instances = Some(v);
            self
        }
        pub fn set_notebook_instances(mut self, input: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceSummary>>) -> Self {
            self.notebook_instances = input;
            self
        }
        /// Consumes the builder and constructs a [`ListNotebookInstancesOutput`](crate::output::ListNotebookInstancesOutput)
        pub fn build(self) -> crate::output::ListNotebookInstancesOutput {
            crate::output::ListNotebookInstancesOutput {
                next_token: self.next_token,
                notebook_instances: self.notebook_instances,
            }
        }
    }
}
impl ListNotebookInstancesOutput {
    /// Creates a new builder-style object to manufacture [`ListNotebookInstancesOutput`](crate::output::ListNotebookInstancesOutput)
    pub fn builder() -> crate::output::list_notebook_instances_output::Builder {
        crate::output::list_notebook_instances_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreatePresignedNotebookInstanceUrlOutput {
    #[serde(rename = "AuthorizedUrl")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub authorized_url: std::option::Option<std::string::String>,
}
impl CreatePresignedNotebookInstanceUrlOutput {
    pub fn authorized_url(&self) -> std::option::Option<&str> {
        self.authorized_url.as_deref()
    }
}
/// See [`CreatePresignedNotebookInstanceUrlOutput`](crate::output::CreatePresignedNotebookInstanceUrlOutput)
pub mod create_presigned_notebook_instance_url_output {
    /// A builder for [`CreatePresignedNotebookInstanceUrlOutput`](crate::output::CreatePresignedNotebookInstanceUrlOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        authorized_url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn authorized_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.authorized_url = Some(input.into());
            self
        }
        pub fn set_authorized_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.authorized_url = input;
            self
        }
        /// Consumes the builder and constructs a [`CreatePresignedNotebookInstanceUrlOutput`](crate::output::CreatePresignedNotebookInstanceUrlOutput)
        pub fn build(self) -> crate::output::CreatePresignedNotebookInstanceUrlOutput {
            crate::output::CreatePresignedNotebookInstanceUrlOutput {
                authorized_url: self.authorized_url,
            }
        }
    }
}
impl CreatePresignedNotebookInstanceUrlOutput {
    /// Creates a new builder-style object to manufacture [`CreatePresignedNotebookInstanceUrlOutput`](crate::output::CreatePresignedNotebookInstanceUrlOutput)
    pub fn builder() -> crate::output::create_presigned_notebook_instance_url_output::Builder {
        crate::output::create_presigned_notebook_instance_url_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateTrainingJobOutput {
    #[serde(rename = "TrainingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_arn: std::option::Option<std::string::String>,
}
impl CreateTrainingJobOutput {
    pub fn training_job_arn(&self) -> std::option::Option<&str> {
        self.training_job_arn.as_deref()
    }
}
/// See [`CreateTrainingJobOutput`](crate::output::CreateTrainingJobOutput)
pub mod create_training_job_output {
    /// A builder for [`CreateTrainingJobOutput`](crate::output::CreateTrainingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn training_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_arn = Some(input.into());
            self
        }
        pub fn set_training_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTrainingJobOutput`](crate::output::CreateTrainingJobOutput)
        pub fn build(self) -> crate::output::CreateTrainingJobOutput {
            crate::output::CreateTrainingJobOutput {
                training_job_arn: self.training_job_arn,
            }
        }
    }
}
impl CreateTrainingJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateTrainingJobOutput`](crate::output::CreateTrainingJobOutput)
    pub fn builder() -> crate::output::create_training_job_output::Builder {
        crate::output::create_training_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeTrainingJobOutput {
    #[serde(rename = "TrainingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "TrainingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_arn: std::option::Option<std::string::String>,
    /// The ARN of the hyperparameter tuning job that launched this training job, if any.
    #[serde(rename = "TuningJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tuning_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "LabelingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "AutoMLJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_ml_job_arn: std::option::Option<std::string::String>,
    /// Where the model artifacts produced by the job were stored.
    #[serde(rename = "ModelArtifacts")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_artifacts: std::option::Option<crate::model::ModelArtifacts>,
    #[serde(rename = "TrainingJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_status: std::option::Option<crate::model::TrainingJobStatus>,
    /// Detailed progress of the training job.
    #[serde(rename = "SecondaryStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub secondary_status: std::option::Option<crate::model::SecondaryStatus>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    #[serde(rename = "HyperParameters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    #[serde(rename = "AlgorithmSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub algorithm_specification: std::option::Option<crate::model::AlgorithmSpecification>,
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "InputDataConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_data_config: std::option::Option<std::vec::Vec<crate::model::Channel>>,
    #[serde(rename = "OutputDataConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_data_config: std::option::Option<crate::model::OutputDataConfig>,
    #[serde(rename = "ResourceConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_config: std::option::Option<crate::model::ResourceConfig>,
    #[serde(rename = "VpcConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    #[serde(rename = "StoppingCondition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stopping_condition: std::option::Option<crate::model::StoppingCondition>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingStartTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_start_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    /// History of the job's secondary statuses.
    #[serde(rename = "SecondaryStatusTransitions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub secondary_status_transitions: std::option::Option<std::vec::Vec<crate::model::SecondaryStatusTransition>>,
    /// The final value of each metric the algorithm emitted.
    #[serde(rename = "FinalMetricDataList")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub final_metric_data_list: std::option::Option<std::vec::Vec<crate::model::MetricData>>,
    #[serde(rename = "EnableNetworkIsolation")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_network_isolation: std::option::Option<bool>,
    #[serde(rename = "EnableInterContainerTrafficEncryption")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_inter_container_traffic_encryption: std::option::Option<bool>,
    #[serde(rename = "EnableManagedSpotTraining")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_managed_spot_training: std::option::Option<bool>,
    #[serde(rename = "CheckpointConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub checkpoint_config: std::option::Option<crate::model::CheckpointConfig>,
    #[serde(rename = "TrainingTimeInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_time_in_seconds: std::option::Option<i32>,
    /// Billable time for the job. Lower than training time when managed spot training is used.
    #[serde(rename = "BillableTimeInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub billable_time_in_seconds: std::option::Option<i32>,
    /// Where debugger tensors are written and which collections are saved.
    #[serde(rename = "DebugHookConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub debug_hook_config: std::option::Option<crate::model::DebugHookConfig>,
    #[serde(rename = "DebugRuleConfigurations")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub debug_rule_configurations: std::option::Option<std::vec::Vec<crate::model::DebugRuleConfiguration>>,
    #[serde(rename = "TensorBoardOutputConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tensor_board_output_config: std::option::Option<crate::model::TensorBoardOutputConfig>,
    #[serde(rename = "ExperimentConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub experiment_config: std::option::Option<crate::model::ExperimentConfig>,
    #[serde(rename = "DebugRuleEvaluationStatuses")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub debug_rule_evaluation_statuses: std::option::Option<std::vec::Vec<crate::model::DebugRuleEvaluationStatus>>,
}
impl DescribeTrainingJobOutput {
    pub fn training_job_name(&self) -> std::option::Option<&str> {
        self.training_job_name.as_deref()
    }

    pub fn training_job_arn(&self) -> std::option::Option<&str> {
        self.training_job_arn.as_deref()
    }

    pub fn tuning_job_arn(&self) -> std::option::Option<&str> {
        self.tuning_job_arn.as_deref()
    }

    pub fn labeling_job_arn(&self) -> std::option::Option<&str> {
        self.labeling_job_arn.as_deref()
    }

    pub fn auto_ml_job_arn(&self) -> std::option::Option<&str> {
        self.auto_ml_job_arn.as_deref()
    }

    pub fn model_artifacts(&self) -> std::option::Option<&crate::model::ModelArtifacts> {
        self.model_artifacts.as_ref()
    }

    pub fn training_job_status(&self) -> std::option::Option<&crate::model::TrainingJobStatus> {
        self.training_job_status.as_ref()
    }

    pub fn secondary_status(&self) -> std::option::Option<&crate::model::SecondaryStatus> {
        self.secondary_status.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn hyper_parameters(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.hyper_parameters.as_ref()
    }

    pub fn algorithm_specification(&self) -> std::option::Option<&crate::model::AlgorithmSpecification> {
        self.algorithm_specification.as_ref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn input_data_config(&self) -> std::option::Option<&[crate::model::Channel]> {
        self.input_data_config.as_deref()
    }

    pub fn output_data_config(&self) -> std::option::Option<&crate::model::OutputDataConfig> {
        self.output_data_config.as_ref()
    }

    pub fn resource_config(&self) -> std::option::Option<&crate::model::ResourceConfig> {
        self.resource_config.as_ref()
    }

    pub fn vpc_config(&self) -> std::option::Option<&crate::model::VpcConfig> {
        self.vpc_config.as_ref()
    }

    pub fn stopping_condition(&self) -> std::option::Option<&crate::model::StoppingCondition> {
        self.stopping_condition.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn training_start_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.training_start_time.as_ref()
    }

    pub fn training_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.training_end_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn secondary_status_transitions(&self) -> std::option::Option<&[crate::model::SecondaryStatusTransition]> {
        self.secondary_status_transitions.as_deref()
    }

    pub fn final_metric_data_list(&self) -> std::option::Option<&[crate::model::MetricData]> {
        self.final_metric_data_list.as_deref()
    }

    pub fn enable_network_isolation(&self) -> std::option::Option<bool> {
        self.enable_network_isolation
    }

    pub fn enable_inter_container_traffic_encryption(&self) -> std::option::Option<bool> {
        self.enable_inter_container_traffic_encryption
    }

    pub fn enable_managed_spot_training(&self) -> std::option::Option<bool> {
        self.enable_managed_spot_training
    }

    pub fn checkpoint_config(&self) -> std::option::Option<&crate::model::CheckpointConfig> {
        self.checkpoint_config.as_ref()
    }

    pub fn training_time_in_seconds(&self) -> std::option::Option<i32> {
        self.training_time_in_seconds
    }

    pub fn billable_time_in_seconds(&self) -> std::option::Option<i32> {
        self.billable_time_in_seconds
    }

    pub fn debug_hook_config(&self) -> std::option::Option<&crate::model::DebugHookConfig> {
        self.debug_hook_config.as_ref()
    }

    pub fn debug_rule_configurations(&self) -> std::option::Option<&[crate::model::DebugRuleConfiguration]> {
        self.debug_rule_configurations.as_deref()
    }

    pub fn tensor_board_output_config(&self) -> std::option::Option<&crate::model::TensorBoardOutputConfig> {
        self.tensor_board_output_config.as_ref()
    }

    pub fn experiment_config(&self) -> std::option::Option<&crate::model::ExperimentConfig> {
        self.experiment_config.as_ref()
    }

    pub fn debug_rule_evaluation_statuses(&self) -> std::option::Option<&[crate::model::DebugRuleEvaluationStatus]> {
        self.debug_rule_evaluation_statuses.as_deref()
    }
}
/// See [`DescribeTrainingJobOutput`](crate::output::DescribeTrainingJobOutput)
pub mod describe_training_job_output {
    /// A builder for [`DescribeTrainingJobOutput`](crate::output::DescribeTrainingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_name: std::option::Option<std::string::String>,
        training_job_arn: std::option::Option<std::string::String>,
        tuning_job_arn: std::option::Option<std::string::String>,
        labeling_job_arn: std::option::Option<std::string::String>,
        auto_ml_job_arn: std::option::Option<std::string::String>,
        model_artifacts: std::option::Option<crate::model::ModelArtifacts>,
        training_job_status: std::option::Option<crate::model::TrainingJobStatus>,
        secondary_status: std::option::Option<crate::model::SecondaryStatus>,
        failure_reason: std::option::Option<std::string::String>,
        hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        algorithm_specification: std::option::Option<crate::model::AlgorithmSpecification>,
        role_arn: std::option::Option<std::string::String>,
        input_data_config: std::option::Option<std::vec::Vec<crate::model::Channel>>,
        output_data_config: std::option::Option<crate::model::OutputDataConfig>,
        resource_config: std::option::Option<crate::model::ResourceConfig>,
        vpc_config: std::option::Option<crate::model::VpcConfig>,
        stopping_condition: std::option::Option<crate::model::StoppingCondition>,
        creation_time: std::option::Option<smithy_types::Instant>,
        training_start_time: std::option::Option<smithy_types::Instant>,
        training_end_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        secondary_status_transitions: std::option::Option<std::vec::Vec<crate::model::SecondaryStatusTransition>>,
        final_metric_data_list: std::option::Option<std::vec::Vec<crate::model::MetricData>>,
        enable_network_isolation: std::option::Option<bool>,
        enable_inter_container_traffic_encryption: std::option::Option<bool>,
        enable_managed_spot_training: std::option::Option<bool>,
        checkpoint_config: std::option::Option<crate::model::CheckpointConfig>,
        training_time_in_seconds: std::option::Option<i32>,
        billable_time_in_seconds: std::option::Option<i32>,
        debug_hook_config: std::option::Option<crate::model::DebugHookConfig>,
        debug_rule_configurations: std::option::Option<std::vec::Vec<crate::model::DebugRuleConfiguration>>,
        tensor_board_output_config: std::option::Option<crate::model::TensorBoardOutputConfig>,
        experiment_config: std::option::Option<crate::model::ExperimentConfig>,
        debug_rule_evaluation_statuses: std::option::Option<std::vec::Vec<crate::model::DebugRuleEvaluationStatus>>,
    }
    impl Builder {
        pub fn training_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_name = Some(input.into());
            self
        }
        pub fn set_training_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_name = input;
            self
        }
        pub fn training_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.training_job_arn = Some(input.into());
            self
        }
        pub fn set_training_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.training_job_arn = input;
            self
        }
        pub fn tuning_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.tuning_job_arn = Some(input.into());
            self
        }
        pub fn set_tuning_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.tuning_job_arn = input;
            self
        }
        pub fn labeling_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_arn = Some(input.into());
            self
        }
        pub fn set_labeling_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_arn = input;
            self
        }
        pub fn auto_ml_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.auto_ml_job_arn = Some(input.into());
            self
        }
        pub fn set_auto_ml_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auto_ml_job_arn = input;
            self
        }
        pub fn model_artifacts(mut self, input: crate::model::ModelArtifacts) -> Self {
            self.model_artifacts = Some(input);
            self
        }
        pub fn set_model_artifacts(mut self, input: std::option::Option<crate::model::ModelArtifacts>) -> Self {
            self.model_artifacts = input;
            self
        }
        pub fn training_job_status(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.training_job_status = Some(input);
            self
        }
        pub fn set_training_job_status(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.training_job_status = input;
            self
        }
        pub fn secondary_status(mut self, input: crate::model::SecondaryStatus) -> Self {
            self.secondary_status = Some(input);
            self
        }
        pub fn set_secondary_status(mut self, input: std::option::Option<crate::model::SecondaryStatus>) -> Self {
            self.secondary_status = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        /// Adds a key-value pair to `HyperParameters`.
        ///
        /// To override the contents of this collection use [`set_hyper_parameters`](Self::set_hyper_parameters).
        pub fn hyper_parameters(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.hyper_parameters.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.hyper_parameters = Some(hash_map);
            self
        }
        pub fn set_hyper_parameters(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.hyper_parameters = input;
            self
        }
        pub fn algorithm_specification(mut self, input: crate::model::AlgorithmSpecification) -> Self {
            self.algorithm_specification = Some(input);
            self
        }
        pub fn set_algorithm_specification(mut self, input: std::option::Option<crate::model::AlgorithmSpecification>) -> Self {
            self.algorithm_specification = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        /// Appends an item to `InputDataConfig`.
        ///
        /// To override the contents of this collection use [`set_input_data_config`](Self::set_input_data_config).
        pub fn input_data_config(mut self, input: impl Into<crate::model::Channel>) -> Self {
            let mut v = self.input_data_config.unwrap_or_default();
            v.push(input.into());
            self.input_data_config = Some(v);
            self
        }
        pub fn set_input_data_config(mut self, input: std::option::Option<std::vec::Vec<crate::model::Channel>>) -> Self {
            self.input_data_config = input;
            self
        }
        pub fn output_data_config(mut self, input: crate::model::OutputDataConfig) -> Self {
            self.output_data_config = Some(input);
            self
        }
        pub fn set_output_data_config(mut self, input: std::option::Option<crate::model::OutputDataConfig>) -> Self {
            self.output_data_config = input;
            self
        }
        pub fn resource_config(mut self, input: crate::model::ResourceConfig) -> Self {
            self.resource_config = Some(input);
            self
        }
        pub fn set_resource_config(mut self, input: std::option::Option<crate::model::ResourceConfig>) -> Self {
            self.resource_config = input;
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.vpc_config = Some(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.vpc_config = input;
            self
        }
        pub fn stopping_condition(mut self, input: crate::model::StoppingCondition) -> Self {
            self.stopping_condition = Some(input);
            self
        }
        pub fn set_stopping_condition(mut self, input: std::option::Option<crate::model::StoppingCondition>) -> Self {
            self.stopping_condition = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn training_start_time(mut self, input: smithy_types::Instant) -> Self {
            self.training_start_time = Some(input);
            self
        }
        pub fn set_training_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.training_start_time = input;
            self
        }
        pub fn training_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.training_end_time = Some(input);
            self
        }
        pub fn set_training_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.training_end_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        /// Appends an item to `SecondaryStatusTransitions`.
        ///
        /// To override the contents of this collection use [`set_secondary_status_transitions`](Self::set_secondary_status_transitions).
        pub fn secondary_status_transitions(mut self, input: impl Into<crate::model::SecondaryStatusTransition>) -> Self {
            let mut v = self.secondary_status_transitions.unwrap_or_default();
            v.push(input.into());
            self.secondary_status_transitions = Some(v);
            self
        }
        pub fn set_secondary_status_transitions(mut self, input: std::option::Option<std::vec::Vec<crate::model::SecondaryStatusTransition>>) -> Self {
            self.secondary_status_transitions = input;
            self
        }
        /// Appends an item to `FinalMetricDataList`.
        ///
        /// To override the contents of this collection use [`set_final_metric_data_list`](Self::set_final_metric_data_list).
        pub fn final_metric_data_list(mut self, input: impl Into<crate::model::MetricData>) -> Self {
            let mut v = self.final_metric_data_list.unwrap_or_default();
            v.push(input.into());
            self.final_metric_data_list = Some(v);
            self
        }
        pub fn set_final_metric_data_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::MetricData>>) -> Self {
            self.final_metric_data_list = input;
            self
        }
        pub fn enable_network_isolation(mut self, input: bool) -> Self {
            self.enable_network_isolation = Some(input);
            self
        }
        pub fn set_enable_network_isolation(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_network_isolation = input;
            self
        }
        pub fn enable_inter_container_traffic_encryption(mut self, input: bool) -> Self {
            self.enable_inter_container_traffic_encryption = Some(input);
            self
        }
        pub fn set_enable_inter_container_traffic_encryption(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_inter_container_traffic_encryption = input;
            self
        }
        pub fn enable_managed_spot_training(mut self, input: bool) -> Self {
            self.enable_managed_spot_training = Some(input);
            self
        }
        pub fn set_enable_managed_spot_training(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_managed_spot_training = input;
            self
        }
        pub fn checkpoint_config(mut self, input: crate::model::CheckpointConfig) -> Self {
            self.checkpoint_config = Some(input);
            self
        }
        pub fn set_checkpoint_config(mut self, input: std::option::Option<crate::model::CheckpointConfig>) -> Self {
            self.checkpoint_config = input;
            self
        }
        pub fn training_time_in_seconds(mut self, input: i32) -> Self {
            self.training_time_in_seconds = Some(input);
            self
        }
        pub fn set_training_time_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.training_time_in_seconds = input;
            self
        }
        pub fn billable_time_in_seconds(mut self, input: i32) -> Self {
            self.billable_time_in_seconds = Some(input);
            self
        }
        pub fn set_billable_time_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.billable_time_in_seconds = input;
            self
        }
        pub fn debug_hook_config(mut self, input: crate::model::DebugHookConfig) -> Self {
            self.debug_hook_config = Some(input);
            self
        }
        pub fn set_debug_hook_config(mut self, input: std::option::Option<crate::model::DebugHookConfig>) -> Self {
            self.debug_hook_config = input;
            self
        }
        /// Appends an item to `DebugRuleConfigurations`.
        ///
        /// To override the contents of this collection use [`set_debug_rule_configurations`](Self::set_debug_rule_configurations).
        pub fn debug_rule_configurations(mut self, input: impl Into<crate::model::DebugRuleConfiguration>) -> Self {
            let mut v = self.debug_rule_configurations.unwrap_or_default();
            v.push(input.into());
            self.debug_rule_configurations = Some(v);
            self
        }
        pub fn set_debug_rule_configurations(mut self, input: std::option::Option<std::vec::Vec<crate::model::DebugRuleConfiguration>>) -> Self {
            self.debug_rule_configurations = input;
            self
        }
        pub fn tensor_board_output_config(mut self, input: crate::model::TensorBoardOutputConfig) -> Self {
            self.tensor_board_output_config = Some(input);
            self
        }
        pub fn set_tensor_board_output_config(mut self, input: std::option::Option<crate::model::TensorBoardOutputConfig>) -> Self {
            self.tensor_board_output_config = input;
            self
        }
        pub fn experiment_config(mut self, input: crate::model::ExperimentConfig) -> Self {
            self.experiment_config = Some(input);
            self
        }
        pub fn set_experiment_config(mut self, input: std::option::Option<crate::model::ExperimentConfig>) -> Self {
            self.experiment_config = input;
            self
        }
        /// Appends an item to `DebugRuleEvaluationStatuses`.
        ///
        /// To override the contents of this collection use [`set_debug_rule_evaluation_statuses`](Self::set_debug_rule_evaluation_statuses).
        pub fn debug_rule_evaluation_statuses(mut self, input: impl Into<crate::model::DebugRuleEvaluationStatus>) -> Self {
            let mut v = self.debug_rule_evaluation_statuses.unwrap_or_default();
            v.push(input.into());
            self.debug_rule_evaluation_statuses = Some(v);
            self
        }
        pub fn set_debug_rule_evaluation_statuses(mut self, input: std::option::Option<std::vec::Vec<crate::model::DebugRuleEvaluationStatus>>) -> Self {
            self.debug_rule_evaluation_statuses = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTrainingJobOutput`](crate::output::DescribeTrainingJobOutput)
        pub fn build(self) -> crate::output::DescribeTrainingJobOutput {
            crate::output::DescribeTrainingJobOutput {
                training_job_name: self.training_job_name,
                training_job_arn: self.training_job_arn,
                tuning_job_arn: self.tuning_job_arn,
                labeling_job_arn: self.labeling_job_arn,
                auto_ml_job_arn: self.auto_ml_job_arn,
                model_artifacts: self.model_artifacts,
                training_job_status: self.training_job_status,
                secondary_status: self.secondary_status,
                failure_reason: self.failure_reason,
                hyper_parameters: self.hyper_parameters,
                algorithm_specification: self.algorithm_specification,
                role_arn: self.role_arn,
                input_data_config: self.input_data_config,
                output_data_config: self.output_data_config,
                resource_config: self.resource_config,
                vpc_config: self.vpc_config,
                stopping_condition: self.stopping_condition,
                creation_time: self.creation_time,
                training_start_time: self.training_start_time,
                training_end_time: self.training_end_time,
                last_modified_time: self.last_modified_time,
                secondary_status_transitions: self.secondary_status_transitions,
                final_metric_data_list: self.final_metric_data_list,
                enable_network_isolation: self.enable_network_isolation,
                enable_inter_container_traffic_encryption: self.enable_inter_container_traffic_encryption,
                enable_managed_spot_training: self.enable_managed_spot_training,
                checkpoint_config: self.checkpoint_config,
                training_time_in_seconds: self.training_time_in_seconds,
                billable_time_in_seconds: self.billable_time_in_seconds,
                debug_hook_config: self.debug_hook_config,
                debug_rule_configurations: self.debug_rule_configurations,
                tensor_board_output_config: self.tensor_board_output_config,
                experiment_config: self.experiment_config,
                debug_rule_evaluation_statuses: self.debug_rule_evaluation_statuses,
            }
        }
    }
}
impl DescribeTrainingJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTrainingJobOutput`](crate::output::DescribeTrainingJobOutput)
    pub fn builder() -> crate::output::describe_training_job_output::Builder {
        crate::output::describe_training_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTrainingJobsOutput {
    #[serde(rename = "TrainingJobSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_summaries: std::option::Option<std::vec::Vec<crate::model::TrainingJobSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTrainingJobsOutput {
    pub fn training_job_summaries(&self) -> std::option::Option<&[crate::model::TrainingJobSummary]> {
        self.training_job_summaries.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListTrainingJobsOutput`](crate::output::ListTrainingJobsOutput)
pub mod list_training_jobs_output {
    /// A builder for [`ListTrainingJobsOutput`](crate::output::ListTrainingJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_summaries: std::option::Option<std::vec::Vec<crate::model::TrainingJobSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `TrainingJobSummaries`.
        ///
        /// To override the contents of this collection use [`set_training_job_summaries`](Self::set_training_job_summaries).
        pub fn training_job_summaries(mut self, input: impl Into<crate::model::TrainingJobSummary>) -> Self {
            let mut v = self.training_job_summaries.unwrap_or_default();
            v.push(input.into());
            self.training_job_summaries = Some(v);
            self
        }
        pub fn set_training_job_summaries(mut self, input: std::option::Option<std::vec::Vec<crate::model::TrainingJobSummary>>) -> Self {
            self.training_job_summaries = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTrainingJobsOutput`](crate::output::ListTrainingJobsOutput)
        pub fn build(self) -> crate::output::ListTrainingJobsOutput {
            crate::output::ListTrainingJobsOutput {
                training_job_summaries: self.training_job_summaries,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTrainingJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListTrainingJobsOutput`](crate::output::ListTrainingJobsOutput)
    pub fn builder() -> crate::output::list_training_jobs_output::Builder {
        crate::output::list_training_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopTrainingJobOutput {}
/// See [`StopTrainingJobOutput`](crate::output::StopTrainingJobOutput)
pub mod stop_training_job_output {
    /// A builder for [`StopTrainingJobOutput`](crate::output::StopTrainingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StopTrainingJobOutput`](crate::output::StopTrainingJobOutput)
        pub fn build(self) -> crate::output::StopTrainingJobOutput {
            crate::output::StopTrainingJobOutput {}
        }
    }
}
impl StopTrainingJobOutput {
    /// Creates a new builder-style object to manufacture [`StopTrainingJobOutput`](crate::output::StopTrainingJobOutput)
    pub fn builder() -> crate::output::stop_training_job_output::Builder {
        crate::output::stop_training_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateModelOutput {
    #[serde(rename = "ModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_arn: std::option::Option<std::string::String>,
}
impl CreateModelOutput {
    pub fn model_arn(&self) -> std::option::Option<&str> {
        self.model_arn.as_deref()
    }
}
/// See [`CreateModelOutput`](crate::output::CreateModelOutput)
pub mod create_model_output {
    /// A builder for [`CreateModelOutput`](crate::output::CreateModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        model_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn model_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_arn = Some(input.into());
            self
        }
        pub fn set_model_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateModelOutput`](crate::output::CreateModelOutput)
        pub fn build(self) -> crate::output::CreateModelOutput {
            crate::output::CreateModelOutput {
                model_arn: self.model_arn,
            }
        }
    }
}
impl CreateModelOutput {
    /// Creates a new builder-style object to manufacture [`CreateModelOutput`](crate::output::CreateModelOutput)
    pub fn builder() -> crate::output::create_model_output::Builder {
        crate::output::create_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeModelOutput {
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
    #[serde(rename = "PrimaryContainer")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub primary_container: std::option::Option<crate::model::ContainerDefinition>,
    #[serde(rename = "Containers")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub containers: std::option::Option<std::vec::Vec<crate::model::ContainerDefinition>>,
    #[serde(rename = "ExecutionRoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub execution_role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "VpcConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "ModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_arn: std::option::Option<std::string::String>,
    #[serde(rename = "EnableNetworkIsolation")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_network_isolation: std::option::Option<bool>,
}
impl DescribeModelOutput {
    pub fn model_name(&self) -> std::option::Option<&str> {
        self.model_name.as_deref()
    }

    pub fn primary_container(&self) -> std::option::Option<&crate::model::ContainerDefinition> {
        self.primary_container.as_ref()
    }

    pub fn containers(&self) -> std::option::Option<&[crate::model::ContainerDefinition]> {
        self.containers.as_deref()
    }

    pub fn execution_role_arn(&self) -> std::option::Option<&str> {
        self.execution_role_arn.as_deref()
    }

    pub fn vpc_config(&self) -> std::option::Option<&crate::model::VpcConfig> {
        self.vpc_config.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn model_arn(&self) -> std::option::Option<&str> {
        self.model_arn.as_deref()
    }

    pub fn enable_network_isolation(&self) -> std::option::Option<bool> {
        self.enable_network_isolation
    }
}
/// See [`DescribeModelOutput`](crate::output::DescribeModelOutput)
pub mod describe_model_output {
    /// A builder for [`DescribeModelOutput`](crate::output::DescribeModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        model_name: std::option::Option<std::string::String>,
        primary_container: std::option::Option<crate::model::ContainerDefinition>,
        containers: std::option::Option<std::vec::Vec<crate::model::ContainerDefinition>>,
        execution_role_arn: std::option::Option<std::string::String>,
        vpc_config: std::option::Option<crate::model::VpcConfig>,
        creation_time: std::option::Option<smithy_types::Instant>,
        model_arn: std::option::Option<std::string::String>,
        enable_network_isolation: std::option::Option<bool>,
    }
    impl Builder {
        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_name = Some(input.into());
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_name = input;
            self
        }
        pub fn primary_container(mut self, input: crate::model::ContainerDefinition) -> Self {
            self.primary_container = Some(input);
            self
        }
        pub fn set_primary_container(mut self, input: std::option::Option<crate::model::ContainerDefinition>) -> Self {
            self.primary_container = input;
            self
        }
        /// Appends an item to `Containers`.
        ///
        /// To override the contents of this collection use [`set_containers`](Self::set_containers).
        pub fn containers(mut self, input: impl Into<crate::model::ContainerDefinition>) -> Self {
            let mut v = self.containers.unwrap_or_default();
            v.push(input.into());
            self.containers = Some(v);
            self
        }
        pub fn set_containers(mut self, input: std::option::Option<std::vec::Vec<crate::model::ContainerDefinition>>) -> Self {
            self.containers = input;
            self
        }
        pub fn execution_role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.execution_role_arn = Some(input.into());
            self
        }
        pub fn set_execution_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.execution_role_arn = input;
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.vpc_config = Some(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.vpc_config = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn model_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_arn = Some(input.into());
            self
        }
        pub fn set_model_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_arn = input;
            self
        }
        pub fn enable_network_isolation(mut self, input: bool) -> Self {
            self.enable_network_isolation = Some(input);
            self
        }
        pub fn set_enable_network_isolation(mut self, input: std::option::Option<bool>) -> Self {
            self.enable_network_isolation = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeModelOutput`](crate::output::DescribeModelOutput)
        pub fn build(self) -> crate::output::DescribeModelOutput {
            crate::output::DescribeModelOutput {
                model_name: self.model_name,
                primary_container: self.primary_container,
                containers: self.containers,
                execution_role_arn: self.execution_role_arn,
                vpc_config: self.vpc_config,
                creation_time: self.creation_time,
                model_arn: self.model_arn,
                enable_network_isolation: self.enable_network_isolation,
            }
        }
    }
}
impl DescribeModelOutput {
    /// Creates a new builder-style object to manufacture [`DescribeModelOutput`](crate::output::DescribeModelOutput)
    pub fn builder() -> crate::output::describe_model_output::Builder {
        crate::output::describe_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteModelOutput {}
/// See [`DeleteModelOutput`](crate::output::DeleteModelOutput)
pub mod delete_model_output {
    /// A builder for [`DeleteModelOutput`](crate::output::DeleteModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteModelOutput`](crate::output::DeleteModelOutput)
        pub fn build(self) -> crate::output::DeleteModelOutput {
            crate::output::DeleteModelOutput {}
        }
    }
}
impl DeleteModelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteModelOutput`](crate::output::DeleteModelOutput)
    pub fn builder() -> crate::output::delete_model_output::Builder {
        crate::output::delete_model_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListModelsOutput {
    #[serde(rename = "Models")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub models: std::option::Option<std::vec::Vec<crate::model::ModelSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListModelsOutput {
    pub fn models(&self) -> std::option::Option<&[crate::model::ModelSummary]> {
        self.models.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListModelsOutput`](crate::output::ListModelsOutput)
pub mod list_models_output {
    /// A builder for [`ListModelsOutput`](crate::output::ListModelsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        models: std::option::Option<std::vec::Vec<crate::model::ModelSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `Models`.
        ///
        /// To override the contents of this collection use [`set_models`](Self::set_models).
        pub fn models(mut self, input: impl Into<crate::model::ModelSummary>) -> Self {
            let mut v = self.models.unwrap_or_default();
            v.push(input.into());
            self.models = Some(v);
            self
        }
        pub fn set_models(mut self, input: std::option::Option<std::vec::Vec<crate::model::ModelSummary>>) -> Self {
            self.models = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListModelsOutput`](crate::output::ListModelsOutput)
        pub fn build(self) -> crate::output::ListModelsOutput {
            crate::output::ListModelsOutput {
                models: self.models,
                next_token: self.next_token,
            }
        }
    }
}
impl ListModelsOutput {
    /// Creates a new builder-style object to manufacture [`ListModelsOutput`](crate::output::ListModelsOutput)
    pub fn builder() -> crate::output::list_models_output::Builder {
        crate::output::list_models_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateTransformJobOutput {
    #[serde(rename = "TransformJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_arn: std::option::Option<std::string::String>,
}
impl CreateTransformJobOutput {
    pub fn transform_job_arn(&self) -> std::option::Option<&str> {
        self.transform_job_arn.as_deref()
    }
}
/// See [`CreateTransformJobOutput`](crate::output::CreateTransformJobOutput)
pub mod create_transform_job_output {
    /// A builder for [`CreateTransformJobOutput`](crate::output::CreateTransformJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn transform_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.transform_job_arn = Some(input.into());
            self
        }
        pub fn set_transform_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.transform_job_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTransformJobOutput`](crate::output::CreateTransformJobOutput)
        pub fn build(self) -> crate::output::CreateTransformJobOutput {
            crate::output::CreateTransformJobOutput {
                transform_job_arn: self.transform_job_arn,
            }
        }
    }
}
impl CreateTransformJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateTransformJobOutput`](crate::output::CreateTransformJobOutput)
    pub fn builder() -> crate::output::create_transform_job_output::Builder {
        crate::output::create_transform_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeTransformJobOutput {
    #[serde(rename = "TransformJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "TransformJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "TransformJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_status: std::option::Option<crate::model::TransformJobStatus>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
    #[serde(rename = "MaxConcurrentTransforms")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_concurrent_transforms: std::option::Option<i32>,
    #[serde(rename = "MaxPayloadInMB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_payload_in_mb: std::option::Option<i32>,
    #[serde(rename = "BatchStrategy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub batch_strategy: std::option::Option<crate::model::BatchStrategy>,
    #[serde(rename = "Environment")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub environment: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
    #[serde(rename = "TransformInput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_input: std::option::Option<crate::model::TransformInput>,
    #[serde(rename = "TransformOutput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_output: std::option::Option<crate::model::TransformOutput>,
    #[serde(rename = "TransformResources")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_resources: std::option::Option<crate::model::TransformResources>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TransformStartTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_start_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TransformEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LabelingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "AutoMLJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auto_ml_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "DataProcessing")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_processing: std::option::Option<crate::model::DataProcessing>,
    #[serde(rename = "ExperimentConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub experiment_config: std::option::Option<crate::model::ExperimentConfig>,
}
impl DescribeTransformJobOutput {
    pub fn transform_job_name(&self) -> std::option::Option<&str> {
        self.transform_job_name.as_deref()
    }

    pub fn transform_job_arn(&self) -> std::option::Option<&str> {
        self.transform_job_arn.as_deref()
    }

    pub fn transform_job_status(&self) -> std::option::Option<&crate::model::TransformJobStatus> {
        self.transform_job_status.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn model_name(&self) -> std::option::Option<&str> {
        self.model_name.as_deref()
    }

    pub fn max_concurrent_transforms(&self) -> std::option::Option<i32> {
        self.max_concurrent_transforms
    }

    pub fn max_payload_in_mb(&self) -> std::option::Option<i32> {
        self.max_payload_in_mb
    }

    pub fn batch_strategy(&self) -> std::option::Option<&crate::model::BatchStrategy> {
        self.batch_strategy.as_ref()
    }

    pub fn environment(&self) -> std::option::Option<&std::collections::BTreeMap<std::string::String, std::string::String>> {
        self.environment.as_ref()
    }

    pub fn transform_input(&self) -> std::option::Option<&crate::model::TransformInput> {
        self.transform_input.as_ref()
    }

    pub fn transform_output(&self) -> std::option::Option<&crate::model::TransformOutput> {
        self.transform_output.as_ref()
    }

    pub fn transform_resources(&self) -> std::option::Option<&crate::model::TransformResources> {
        self.transform_resources.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn transform_start_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.transform_start_time.as_ref()
    }

    pub fn transform_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.transform_end_time.as_ref()
    }

    pub fn labeling_job_arn(&self) -> std::option::Option<&str> {
        self.labeling_job_arn.as_deref()
    }

    pub fn auto_ml_job_arn(&self) -> std::option::Option<&str> {
        self.auto_ml_job_arn.as_deref()
    }

    pub fn data_processing(&self) -> std::option::Option<&crate::model::DataProcessing> {
        self.data_processing.as_ref()
    }

    pub fn experiment_config(&self) -> std::option::Option<&crate::model::ExperimentConfig> {
        self.experiment_config.as_ref()
    }
}
/// See [`DescribeTransformJobOutput`](crate::output::DescribeTransformJobOutput)
pub mod describe_transform_job_output {
    /// A builder for [`DescribeTransformJobOutput`](crate::output::DescribeTransformJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_name: std::option::Option<std::string::String>,
        transform_job_arn: std::option::Option<std::string::String>,
        transform_job_status: std::option::Option<crate::model::TransformJobStatus>,
        failure_reason: std::option::Option<std::string::String>,
        model_name: std::option::Option<std::string::String>,
        max_concurrent_transforms: std::option::Option<i32>,
        max_payload_in_mb: std::option::Option<i32>,
        batch_strategy: std::option::Option<crate::model::BatchStrategy>,
        environment: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        transform_input: std::option::Option<crate::model::TransformInput>,
        transform_output: std::option::Option<crate::model::TransformOutput>,
        transform_resources: std::option::Option<crate::model::TransformResources>,
        creation_time: std::option::Option<smithy_types::Instant>,
        transform_start_time: std::option::Option<smithy_types::Instant>,
        transform_end_time: std::option::Option<smithy_types::Instant>,
        labeling_job_arn: std::option::Option<std::string::String>,
        auto_ml_job_arn: std::option::Option<std::string::String>,
        data_processing: std::option::Option<crate::model::DataProcessing>,
        experiment_config: std::option::Option<crate::model::ExperimentConfig>,
    }
    impl Builder {
        pub fn transform_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.transform_job_name = Some(input.into());
            self
        }
        pub fn set_transform_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.transform_job_name = input;
            self
        }
        pub fn transform_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.transform_job_arn = Some(input.into());
            self
        }
        pub fn set_transform_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.transform_job_arn = input;
            self
        }
        pub fn transform_job_status(mut self, input: crate::model::TransformJobStatus) -> Self {
            self.transform_job_status = Some(input);
            self
        }
        pub fn set_transform_job_status(mut self, input: std::option::Option<crate::model::TransformJobStatus>) -> Self {
            self.transform_job_status = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        pub fn model_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.model_name = Some(input.into());
            self
        }
        pub fn set_model_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.model_name = input;
            self
        }
        pub fn max_concurrent_transforms(mut self, input: i32) -> Self {
            self.max_concurrent_transforms = Some(input);
            self
        }
        pub fn set_max_concurrent_transforms(mut self, input: std::option::Option<i32>) -> Self {
            self.max_concurrent_transforms = input;
            self
        }
        pub fn max_payload_in_mb(mut self, input: i32) -> Self {
            self.max_payload_in_mb = Some(input);
            self
        }
        pub fn set_max_payload_in_mb(mut self, input: std::option::Option<i32>) -> Self {
            self.max_payload_in_mb = input;
            self
        }
        pub fn batch_strategy(mut self, input: crate::model::BatchStrategy) -> Self {
            self.batch_strategy = Some(input);
            self
        }
        pub fn set_batch_strategy(mut self, input: std::option::Option<crate::model::BatchStrategy>) -> Self {
            self.batch_strategy = input;
            self
        }
        /// Adds a key-value pair to `Environment`.
        ///
        /// To override the contents of this collection use [`set_environment`](Self::set_environment).
        pub fn environment(mut self, k: impl Into<std::string::String>, v: impl Into<std::string::String>) -> Self {
            let mut hash_map = self.environment.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.environment = Some(hash_map);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>) -> Self {
            self.environment = input;
            self
        }
        pub fn transform_input(mut self, input: crate::model::TransformInput) -> Self {
            self.transform_input = Some(input);
            self
        }
        pub fn set_transform_input(mut self, input: std::option::Option<crate::model::TransformInput>) -> Self {
            self.transform_input = input;
            self
        }
        pub fn transform_output(mut self, input: crate::model::TransformOutput) -> Self {
            self.transform_output = Some(input);
            self
        }
        pub fn set_transform_output(mut self, input: std::option::Option<crate::model::TransformOutput>) -> Self {
            self.transform_output = input;
            self
        }
        pub fn transform_resources(mut self, input: crate::model::TransformResources) -> Self {
            self.transform_resources = Some(input);
            self
        }
        pub fn set_transform_resources(mut self, input: std::option::Option<crate::model::TransformResources>) -> Self {
            self.transform_resources = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn transform_start_time(mut self, input: smithy_types::Instant) -> Self {
            self.transform_start_time = Some(input);
            self
        }
        pub fn set_transform_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.transform_start_time = input;
            self
        }
        pub fn transform_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.transform_end_time = Some(input);
            self
        }
        pub fn set_transform_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.transform_end_time = input;
            self
        }
        pub fn labeling_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_arn = Some(input.into());
            self
        }
        pub fn set_labeling_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_arn = input;
            self
        }
        pub fn auto_ml_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.auto_ml_job_arn = Some(input.into());
            self
        }
        pub fn set_auto_ml_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.auto_ml_job_arn = input;
            self
        }
        pub fn data_processing(mut self, input: crate::model::DataProcessing) -> Self {
            self.data_processing = Some(input);
            self
        }
        pub fn set_data_processing(mut self, input: std::option::Option<crate::model::DataProcessing>) -> Self {
            self.data_processing = input;
            self
        }
        pub fn experiment_config(mut self, input: crate::model::ExperimentConfig) -> Self {
            self.experiment_config = Some(input);
            self
        }
        pub fn set_experiment_config(mut self, input: std::option::Option<crate::model::ExperimentConfig>) -> Self {
            self.experiment_config = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTransformJobOutput`](crate::output::DescribeTransformJobOutput)
        pub fn build(self) -> crate::output::DescribeTransformJobOutput {
            crate::output::DescribeTransformJobOutput {
                transform_job_name: self.transform_job_name,
                transform_job_arn: self.transform_job_arn,
                transform_job_status: self.transform_job_status,
                failure_reason: self.failure_reason,
                model_name: self.model_name,
                max_concurrent_transforms: self.max_concurrent_transforms,
                max_payload_in_mb: self.max_payload_in_mb,
                batch_strategy: self.batch_strategy,
                environment: self.environment,
                transform_input: self.transform_input,
                transform_output: self.transform_output,
                transform_resources: self.transform_resources,
                creation_time: self.creation_time,
                transform_start_time: self.transform_start_time,
                transform_end_time: self.transform_end_time,
                labeling_job_arn: self.labeling_job_arn,
                auto_ml_job_arn: self.auto_ml_job_arn,
                data_processing: self.data_processing,
                experiment_config: self.experiment_config,
            }
        }
    }
}
impl DescribeTransformJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTransformJobOutput`](crate::output::DescribeTransformJobOutput)
    pub fn builder() -> crate::output::describe_transform_job_output::Builder {
        crate::output::describe_transform_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTransformJobsOutput {
    #[serde(rename = "TransformJobSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_summaries: std::option::Option<std::vec::Vec<crate::model::TransformJobSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTransformJobsOutput {
    pub fn transform_job_summaries(&self) -> std::option::Option<&[crate::model::TransformJobSummary]> {
        self.transform_job_summaries.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListTransformJobsOutput`](crate::output::ListTransformJobsOutput)
pub mod list_transform_jobs_output {
    /// A builder for [`ListTransformJobsOutput`](crate::output::ListTransformJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_summaries: std::option::Option<std::vec::Vec<crate::model::TransformJobSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `TransformJobSummaries`.
        ///
        /// To override the contents of this collection use [`set_transform_job_summaries`](Self::set_transform_job_summaries).
        pub fn transform_job_summaries(mut self, input: impl Into<crate::model::TransformJobSummary>) -> Self {
            let mut v = self.transform_job_summaries.unwrap_or_default();
            v.push(input.into());
            self.transform_job_summaries = Some(v);
            self
        }
        pub fn set_transform_job_summaries(mut self, input: std::option::Option<std::vec::Vec<crate::model::TransformJobSummary>>) -> Self {
            self.transform_job_summaries = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTransformJobsOutput`](crate::output::ListTransformJobsOutput)
        pub fn build(self) -> crate::output::ListTransformJobsOutput {
            crate::output::ListTransformJobsOutput {
                transform_job_summaries: self.transform_job_summaries,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTransformJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListTransformJobsOutput`](crate::output::ListTransformJobsOutput)
    pub fn builder() -> crate::output::list_transform_jobs_output::Builder {
        crate::output::list_transform_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopTransformJobOutput {}
/// See [`StopTransformJobOutput`](crate::output::StopTransformJobOutput)
pub mod stop_transform_job_output {
    /// A builder for [`StopTransformJobOutput`](crate::output::StopTransformJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StopTransformJobOutput`](crate::output::StopTransformJobOutput)
        pub fn build(self) -> crate::output::StopTransformJobOutput {
            crate::output::StopTransformJobOutput {}
        }
    }
}
impl StopTransformJobOutput {
    /// Creates a new builder-style object to manufacture [`StopTransformJobOutput`](crate::output::StopTransformJobOutput)
    pub fn builder() -> crate::output::stop_transform_job_output::Builder {
        crate::output::stop_transform_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateHyperParameterTuningJobOutput {
    #[serde(rename = "HyperParameterTuningJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_arn: std::option::Option<std::string::String>,
}
impl CreateHyperParameterTuningJobOutput {
    pub fn hyper_parameter_tuning_job_arn(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_arn.as_deref()
    }
}
/// See [`CreateHyperParameterTuningJobOutput`](crate::output::CreateHyperParameterTuningJobOutput)
pub mod create_hyper_parameter_tuning_job_output {
    /// A builder for [`CreateHyperParameterTuningJobOutput`](crate::output::CreateHyperParameterTuningJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn hyper_parameter_tuning_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_arn = Some(input.into());
            self
        }
        pub fn set_hyper_parameter_tuning_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateHyperParameterTuningJobOutput`](crate::output::CreateHyperParameterTuningJobOutput)
        pub fn build(self) -> crate::output::CreateHyperParameterTuningJobOutput {
            crate::output::CreateHyperParameterTuningJobOutput {
                hyper_parameter_tuning_job_arn: self.hyper_parameter_tuning_job_arn,
            }
        }
    }
}
impl CreateHyperParameterTuningJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateHyperParameterTuningJobOutput`](crate::output::CreateHyperParameterTuningJobOutput)
    pub fn builder() -> crate::output::create_hyper_parameter_tuning_job_output::Builder {
        crate::output::create_hyper_parameter_tuning_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeHyperParameterTuningJobOutput {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "HyperParameterTuningJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "HyperParameterTuningJobConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_config: std::option::Option<crate::model::HyperParameterTuningJobConfig>,
    #[serde(rename = "TrainingJobDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_definition: std::option::Option<crate::model::HyperParameterTrainingJobDefinition>,
    #[serde(rename = "TrainingJobDefinitions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_definitions: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobDefinition>>,
    #[serde(rename = "HyperParameterTuningJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_status: std::option::Option<crate::model::HyperParameterTuningJobStatus>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "HyperParameterTuningEndTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "TrainingJobStatusCounters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_status_counters: std::option::Option<crate::model::TrainingJobStatusCounters>,
    #[serde(rename = "ObjectiveStatusCounters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub objective_status_counters: std::option::Option<crate::model::ObjectiveStatusCounters>,
    #[serde(rename = "BestTrainingJob")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub best_training_job: std::option::Option<crate::model::HyperParameterTrainingJobSummary>,
    #[serde(rename = "OverallBestTrainingJob")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub overall_best_training_job: std::option::Option<crate::model::HyperParameterTrainingJobSummary>,
    #[serde(rename = "WarmStartConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warm_start_config: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
}
impl DescribeHyperParameterTuningJobOutput {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }

    pub fn hyper_parameter_tuning_job_arn(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_arn.as_deref()
    }

    pub fn hyper_parameter_tuning_job_config(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobConfig> {
        self.hyper_parameter_tuning_job_config.as_ref()
    }

    pub fn training_job_definition(&self) -> std::option::Option<&crate::model::HyperParameterTrainingJobDefinition> {
        self.training_job_definition.as_ref()
    }

    pub fn training_job_definitions(&self) -> std::option::Option<&[crate::model::HyperParameterTrainingJobDefinition]> {
        self.training_job_definitions.as_deref()
    }

    pub fn hyper_parameter_tuning_job_status(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobStatus> {
        self.hyper_parameter_tuning_job_status.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn hyper_parameter_tuning_end_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.hyper_parameter_tuning_end_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn training_job_status_counters(&self) -> std::option::Option<&crate::model::TrainingJobStatusCounters> {
        self.training_job_status_counters.as_ref()
    }

    pub fn objective_status_counters(&self) -> std::option::Option<&crate::model::ObjectiveStatusCounters> {
        self.objective_status_counters.as_ref()
    }

    pub fn best_training_job(&self) -> std::option::Option<&crate::model::HyperParameterTrainingJobSummary> {
        self.best_training_job.as_ref()
    }

    pub fn overall_best_training_job(&self) -> std::option::Option<&crate::model::HyperParameterTrainingJobSummary> {
        self.overall_best_training_job.as_ref()
    }

    pub fn warm_start_config(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobWarmStartConfig> {
        self.warm_start_config.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }
}
/// See [`DescribeHyperParameterTuningJobOutput`](crate::output::DescribeHyperParameterTuningJobOutput)
pub mod describe_hyper_parameter_tuning_job_output {
    /// A builder for [`DescribeHyperParameterTuningJobOutput`](crate::output::DescribeHyperParameterTuningJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
        hyper_parameter_tuning_job_arn: std::option::Option<std::string::String>,
        hyper_parameter_tuning_job_config: std::option::Option<crate::model::HyperParameterTuningJobConfig>,
        training_job_definition: std::option::Option<crate::model::HyperParameterTrainingJobDefinition>,
        training_job_definitions: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobDefinition>>,
        hyper_parameter_tuning_job_status: std::option::Option<crate::model::HyperParameterTuningJobStatus>,
        creation_time: std::option::Option<smithy_types::Instant>,
        hyper_parameter_tuning_end_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        training_job_status_counters: std::option::Option<crate::model::TrainingJobStatusCounters>,
        objective_status_counters: std::option::Option<crate::model::ObjectiveStatusCounters>,
        best_training_job: std::option::Option<crate::model::HyperParameterTrainingJobSummary>,
        overall_best_training_job: std::option::Option<crate::model::HyperParameterTrainingJobSummary>,
        warm_start_config: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>,
        failure_reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn hyper_parameter_tuning_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_name = Some(input.into());
            self
        }
        pub fn set_hyper_parameter_tuning_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_name = input;
            self
        }
        pub fn hyper_parameter_tuning_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_arn = Some(input.into());
            self
        }
        pub fn set_hyper_parameter_tuning_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.hyper_parameter_tuning_job_arn = input;
            self
        }
        pub fn hyper_parameter_tuning_job_config(mut self, input: crate::model::HyperParameterTuningJobConfig) -> Self {
            self.hyper_parameter_tuning_job_config = Some(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_config(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobConfig>) -> Self {
            self.hyper_parameter_tuning_job_config = input;
            self
        }
        pub fn training_job_definition(mut self, input: crate::model::HyperParameterTrainingJobDefinition) -> Self {
            self.training_job_definition = Some(input);
            self
        }
        pub fn set_training_job_definition(mut self, input: std::option::Option<crate::model::HyperParameterTrainingJobDefinition>) -> Self {
            self.training_job_definition = input;
            self
        }
        /// Appends an item to `TrainingJobDefinitions`.
        ///
        /// To override the contents of this collection use [`set_training_job_definitions`](Self::set_training_job_definitions).
        pub fn training_job_definitions(mut self, input: impl Into<crate::model::HyperParameterTrainingJobDefinition>) -> Self {
            let mut v = self.training_job_definitions.unwrap_or_default();
            v.push(input.into());
            self.training_job_definitions = Some(v);
            self
        }
        pub fn set_training_job_definitions(mut self, input: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobDefinition>>) -> Self {
            self.training_job_definitions = input;
            self
        }
        pub fn hyper_parameter_tuning_job_status(mut self, input: crate::model::HyperParameterTuningJobStatus) -> Self {
            self.hyper_parameter_tuning_job_status = Some(input);
            self
        }
        pub fn set_hyper_parameter_tuning_job_status(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobStatus>) -> Self {
            self.hyper_parameter_tuning_job_status = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn hyper_parameter_tuning_end_time(mut self, input: smithy_types::Instant) -> Self {
            self.hyper_parameter_tuning_end_time = Some(input);
            self
        }
        pub fn set_hyper_parameter_tuning_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.hyper_parameter_tuning_end_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn training_job_status_counters(mut self, input: crate::model::TrainingJobStatusCounters) -> Self {
            self.training_job_status_counters = Some(input);
            self
        }
        pub fn set_training_job_status_counters(mut self, input: std::option::Option<crate::model::TrainingJobStatusCounters>) -> Self {
            self.training_job_status_counters = input;
            self
        }
        pub fn objective_status_counters(mut self, input: crate::model::ObjectiveStatusCounters) -> Self {
            self.objective_status_counters = Some(input);
            self
        }
        pub fn set_objective_status_counters(mut self, input: std::option::Option<crate::model::ObjectiveStatusCounters>) -> Self {
            self.objective_status_counters = input;
            self
        }
        pub fn best_training_job(mut self, input: crate::model::HyperParameterTrainingJobSummary) -> Self {
            self.best_training_job = Some(input);
            self
        }
        pub fn set_best_training_job(mut self, input: std::option::Option<crate::model::HyperParameterTrainingJobSummary>) -> Self {
            self.best_training_job = input;
            self
        }
        pub fn overall_best_training_job(mut self, input: crate::model::HyperParameterTrainingJobSummary) -> Self {
            self.overall_best_training_job = Some(input);
            self
        }
        pub fn set_overall_best_training_job(mut self, input: std::option::Option<crate::model::HyperParameterTrainingJobSummary>) -> Self {
            self.overall_best_training_job = input;
            self
        }
        pub fn warm_start_config(mut self, input: crate::model::HyperParameterTuningJobWarmStartConfig) -> Self {
            self.warm_start_config = Some(input);
            self
        }
        pub fn set_warm_start_config(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>) -> Self {
            self.warm_start_config = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeHyperParameterTuningJobOutput`](crate::output::DescribeHyperParameterTuningJobOutput)
        pub fn build(self) -> crate::output::DescribeHyperParameterTuningJobOutput {
            crate::output::DescribeHyperParameterTuningJobOutput {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
                hyper_parameter_tuning_job_arn: self.hyper_parameter_tuning_job_arn,
                hyper_parameter_tuning_job_config: self.hyper_parameter_tuning_job_config,
                training_job_definition: self.training_job_definition,
                training_job_definitions: self.training_job_definitions,
                hyper_parameter_tuning_job_status: self.hyper_parameter_tuning_job_status,
                creation_time: self.creation_time,
                hyper_parameter_tuning_end_time: self.hyper_parameter_tuning_end_time,
                last_modified_time: self.last_modified_time,
                training_job_status_counters: self.training_job_status_counters,
                objective_status_counters: self.objective_status_counters,
                best_training_job: self.best_training_job,
                overall_best_training_job: self.overall_best_training_job,
                warm_start_config: self.warm_start_config,
                failure_reason: self.failure_reason,
            }
        }
    }
}
impl DescribeHyperParameterTuningJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeHyperParameterTuningJobOutput`](crate::output::DescribeHyperParameterTuningJobOutput)
    pub fn builder() -> crate::output::describe_hyper_parameter_tuning_job_output::Builder {
        crate::output::describe_hyper_parameter_tuning_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListHyperParameterTuningJobsOutput {
    #[serde(rename = "HyperParameterTuningJobSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_summaries: std::option::Option<std::vec::Vec<crate::model::HyperParameterTuningJobSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListHyperParameterTuningJobsOutput {
    pub fn hyper_parameter_tuning_job_summaries(&self) -> std::option::Option<&[crate::model::HyperParameterTuningJobSummary]> {
        self.hyper_parameter_tuning_job_summaries.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListHyperParameterTuningJobsOutput`](crate::output::ListHyperParameterTuningJobsOutput)
pub mod list_hyper_parameter_tuning_jobs_output {
    /// A builder for [`ListHyperParameterTuningJobsOutput`](crate::output::ListHyperParameterTuningJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_summaries: std::option::Option<std::vec::Vec<crate::model::HyperParameterTuningJobSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `HyperParameterTuningJobSummaries`.
        ///
        /// To override the contents of this collection use [`set_hyper_parameter_tuning_job_summaries`](Self::set_hyper_parameter_tuning_job_summaries).
        pub fn hyper_parameter_tuning_job_summaries(mut self, input: impl Into<crate::model::HyperParameterTuningJobSummary>) -> Self {
            let mut v = self.hyper_parameter_tuning_job_summaries.unwrap_or_default();
            v.push(input.into());
            self.hyper_parameter_tuning_job_summaries = Some(v);
            self
        }
        pub fn set_hyper_parameter_tuning_job_summaries(mut self, input: std::option::Option<std::vec::Vec<crate::model::HyperParameterTuningJobSummary>>) -> Self {
            self.hyper_parameter_tuning_job_summaries = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListHyperParameterTuningJobsOutput`](crate::output::ListHyperParameterTuningJobsOutput)
        pub fn build(self) -> crate::output::ListHyperParameterTuningJobsOutput {
            crate::output::ListHyperParameterTuningJobsOutput {
                hyper_parameter_tuning_job_summaries: self.hyper_parameter_tuning_job_summaries,
                next_token: self.next_token,
            }
        }
    }
}
impl ListHyperParameterTuningJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListHyperParameterTuningJobsOutput`](crate::output::ListHyperParameterTuningJobsOutput)
    pub fn builder() -> crate::output::list_hyper_parameter_tuning_jobs_output::Builder {
        crate::output::list_hyper_parameter_tuning_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopHyperParameterTuningJobOutput {}
/// See [`StopHyperParameterTuningJobOutput`](crate::output::StopHyperParameterTuningJobOutput)
pub mod stop_hyper_parameter_tuning_job_output {
    /// A builder for [`StopHyperParameterTuningJobOutput`](crate::output::StopHyperParameterTuningJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StopHyperParameterTuningJobOutput`](crate::output::StopHyperParameterTuningJobOutput)
        pub fn build(self) -> crate::output::StopHyperParameterTuningJobOutput {
            crate::output::StopHyperParameterTuningJobOutput {}
        }
    }
}
impl StopHyperParameterTuningJobOutput {
    /// Creates a new builder-style object to manufacture [`StopHyperParameterTuningJobOutput`](crate::output::StopHyperParameterTuningJobOutput)
    pub fn builder() -> crate::output::stop_hyper_parameter_tuning_job_output::Builder {
        crate::output::stop_hyper_parameter_tuning_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTrainingJobsForHyperParameterTuningJobOutput {
    #[serde(rename = "TrainingJobSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_summaries: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListTrainingJobsForHyperParameterTuningJobOutput {
    pub fn training_job_summaries(&self) -> std::option::Option<&[crate::model::HyperParameterTrainingJobSummary]> {
        self.training_job_summaries.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListTrainingJobsForHyperParameterTuningJobOutput`](crate::output::ListTrainingJobsForHyperParameterTuningJobOutput)
pub mod list_training_jobs_for_hyper_parameter_tuning_job_output {
    /// A builder for [`ListTrainingJobsForHyperParameterTuningJobOutput`](crate::output::ListTrainingJobsForHyperParameterTuningJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_summaries: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `TrainingJobSummaries`.
        ///
        /// To override the contents of this collection use [`set_training_job_summaries`](Self::set_training_job_summaries).
        pub fn training_job_summaries(mut self, input: impl Into<crate::model::HyperParameterTrainingJobSummary>) -> Self {
            let mut v = self.training_job_summaries.unwrap_or_default();
            v.push(input.into());
            self.training_job_summaries = Some(v);
            self
        }
        pub fn set_training_job_summaries(mut self, input: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobSummary>>) -> Self {
            self.training_job_summaries = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTrainingJobsForHyperParameterTuningJobOutput`](crate::output::ListTrainingJobsForHyperParameterTuningJobOutput)
        pub fn build(self) -> crate::output::ListTrainingJobsForHyperParameterTuningJobOutput {
            crate::output::ListTrainingJobsForHyperParameterTuningJobOutput {
                training_job_summaries: self.training_job_summaries,
                next_token: self.next_token,
            }
        }
    }
}
impl ListTrainingJobsForHyperParameterTuningJobOutput {
    /// Creates a new builder-style object to manufacture [`ListTrainingJobsForHyperParameterTuningJobOutput`](crate::output::ListTrainingJobsForHyperParameterTuningJobOutput)
    pub fn builder() -> crate::output::list_training_jobs_for_hyper_parameter_tuning_job_output::Builder {
        crate::output::list_training_jobs_for_hyper_parameter_tuning_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateLabelingJobOutput {
    #[serde(rename = "LabelingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_arn: std::option::Option<std::string::String>,
}
impl CreateLabelingJobOutput {
    pub fn labeling_job_arn(&self) -> std::option::Option<&str> {
        self.labeling_job_arn.as_deref()
    }
}
/// See [`CreateLabelingJobOutput`](crate::output::CreateLabelingJobOutput)
pub mod create_labeling_job_output {
    /// A builder for [`CreateLabelingJobOutput`](crate::output::CreateLabelingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn labeling_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_arn = Some(input.into());
            self
        }
        pub fn set_labeling_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateLabelingJobOutput`](crate::output::CreateLabelingJobOutput)
        pub fn build(self) -> crate::output::CreateLabelingJobOutput {
            crate::output::CreateLabelingJobOutput {
                labeling_job_arn: self.labeling_job_arn,
            }
        }
    }
}
impl CreateLabelingJobOutput {
    /// Creates a new builder-style object to manufacture [`CreateLabelingJobOutput`](crate::output::CreateLabelingJobOutput)
    pub fn builder() -> crate::output::create_labeling_job_output::Builder {
        crate::output::create_labeling_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeLabelingJobOutput {
    #[serde(rename = "LabelingJobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_status: std::option::Option<crate::model::LabelingJobStatus>,
    #[serde(rename = "LabelCounters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_counters: std::option::Option<crate::model::LabelCounters>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "JobReferenceCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_reference_code: std::option::Option<std::string::String>,
    #[serde(rename = "LabelingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "LabelingJobArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_arn: std::option::Option<std::string::String>,
    #[serde(rename = "LabelAttributeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_attribute_name: std::option::Option<std::string::String>,
    #[serde(rename = "InputConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_config: std::option::Option<crate::model::LabelingJobInputConfig>,
    #[serde(rename = "OutputConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_config: std::option::Option<crate::model::LabelingJobOutputConfig>,
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "LabelCategoryConfigS3Uri")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub label_category_config_s3_uri: std::option::Option<std::string::String>,
    #[serde(rename = "StoppingConditions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stopping_conditions: std::option::Option<crate::model::LabelingJobStoppingConditions>,
    #[serde(rename = "LabelingJobAlgorithmsConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_algorithms_config: std::option::Option<crate::model::LabelingJobAlgorithmsConfig>,
    #[serde(rename = "HumanTaskConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_task_config: std::option::Option<crate::model::HumanTaskConfig>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    #[serde(rename = "LabelingJobOutput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_output: std::option::Option<crate::model::LabelingJobOutput>,
}
impl DescribeLabelingJobOutput {
    pub fn labeling_job_status(&self) -> std::option::Option<&crate::model::LabelingJobStatus> {
        self.labeling_job_status.as_ref()
    }

    pub fn label_counters(&self) -> std::option::Option<&crate::model::LabelCounters> {
        self.label_counters.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }

    pub fn job_reference_code(&self) -> std::option::Option<&str> {
        self.job_reference_code.as_deref()
    }

    pub fn labeling_job_name(&self) -> std::option::Option<&str> {
        self.labeling_job_name.as_deref()
    }

    pub fn labeling_job_arn(&self) -> std::option::Option<&str> {
        self.labeling_job_arn.as_deref()
    }

    pub fn label_attribute_name(&self) -> std::option::Option<&str> {
        self.label_attribute_name.as_deref()
    }

    pub fn input_config(&self) -> std::option::Option<&crate::model::LabelingJobInputConfig> {
        self.input_config.as_ref()
    }

    pub fn output_config(&self) -> std::option::Option<&crate::model::LabelingJobOutputConfig> {
        self.output_config.as_ref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn label_category_config_s3_uri(&self) -> std::option::Option<&str> {
        self.label_category_config_s3_uri.as_deref()
    }

    pub fn stopping_conditions(&self) -> std::option::Option<&crate::model::LabelingJobStoppingConditions> {
        self.stopping_conditions.as_ref()
    }

    pub fn labeling_job_algorithms_config(&self) -> std::option::Option<&crate::model::LabelingJobAlgorithmsConfig> {
        self.labeling_job_algorithms_config.as_ref()
    }

    pub fn human_task_config(&self) -> std::option::Option<&crate::model::HumanTaskConfig> {
        self.human_task_config.as_ref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn labeling_job_output(&self) -> std::option::Option<&crate::model::LabelingJobOutput> {
        self.labeling_job_output.as_ref()
    }
}
/// See [`DescribeLabelingJobOutput`](crate::output::DescribeLabelingJobOutput)
pub mod describe_labeling_job_output {
    /// A builder for [`DescribeLabelingJobOutput`](crate::output::DescribeLabelingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_status: std::option::Option<crate::model::LabelingJobStatus>,
        label_counters: std::option::Option<crate::model::LabelCounters>,
        failure_reason: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
        job_reference_code: std::option::Option<std::string::String>,
        labeling_job_name: std::option::Option<std::string::String>,
        labeling_job_arn: std::option::Option<std::string::String>,
        label_attribute_name: std::option::Option<std::string::String>,
        input_config: std::option::Option<crate::model::LabelingJobInputConfig>,
        output_config: std::option::Option<crate::model::LabelingJobOutputConfig>,
        role_arn: std::option::Option<std::string::String>,
        label_category_config_s3_uri: std::option::Option<std::string::String>,
        stopping_conditions: std::option::Option<crate::model::LabelingJobStoppingConditions>,
        labeling_job_algorithms_config: std::option::Option<crate::model::LabelingJobAlgorithmsConfig>,
        human_task_config: std::option::Option<crate::model::HumanTaskConfig>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        labeling_job_output: std::option::Option<crate::model::LabelingJobOutput>,
    }
    impl Builder {
        pub fn labeling_job_status(mut self, input: crate::model::LabelingJobStatus) -> Self {
            self.labeling_job_status = Some(input);
            self
        }
        pub fn set_labeling_job_status(mut self, input: std::option::Option<crate::model::LabelingJobStatus>) -> Self {
            self.labeling_job_status = input;
            self
        }
        pub fn label_counters(mut self, input: crate::model::LabelCounters) -> Self {
            self.label_counters = Some(input);
            self
        }
        pub fn set_label_counters(mut self, input: std::option::Option<crate::model::LabelCounters>) -> Self {
            self.label_counters = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        pub fn job_reference_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.job_reference_code = Some(input.into());
            self
        }
        pub fn set_job_reference_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.job_reference_code = input;
            self
        }
        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_name = Some(input.into());
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_name = input;
            self
        }
        pub fn labeling_job_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_arn = Some(input.into());
            self
        }
        pub fn set_labeling_job_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_arn = input;
            self
        }
        pub fn label_attribute_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.label_attribute_name = Some(input.into());
            self
        }
        pub fn set_label_attribute_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.label_attribute_name = input;
            self
        }
        pub fn input_config(mut self, input: crate::model::LabelingJobInputConfig) -> Self {
            self.input_config = Some(input);
            self
        }
        pub fn set_input_config(mut self, input: std::option::Option<crate::model::LabelingJobInputConfig>) -> Self {
            self.input_config = input;
            self
        }
        pub fn output_config(mut self, input: crate::model::LabelingJobOutputConfig) -> Self {
            self.output_config = Some(input);
            self
        }
        pub fn set_output_config(mut self, input: std::option::Option<crate::model::LabelingJobOutputConfig>) -> Self {
            self.output_config = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn label_category_config_s3_uri(mut self, input: impl Into<std::string::String>) -> Self {
            self.label_category_config_s3_uri = Some(input.into());
            self
        }
        pub fn set_label_category_config_s3_uri(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.label_category_config_s3_uri = input;
            self
        }
        pub fn stopping_conditions(mut self, input: crate::model::LabelingJobStoppingConditions) -> Self {
            self.stopping_conditions = Some(input);
            self
        }
        pub fn set_stopping_conditions(mut self, input: std::option::Option<crate::model::LabelingJobStoppingConditions>) -> Self {
            self.stopping_conditions = input;
            self
        }
        pub fn labeling_job_algorithms_config(mut self, input: crate::model::LabelingJobAlgorithmsConfig) -> Self {
            self.labeling_job_algorithms_config = Some(input);
            self
        }
        pub fn set_labeling_job_algorithms_config(mut self, input: std::option::Option<crate::model::LabelingJobAlgorithmsConfig>) -> Self {
            self.labeling_job_algorithms_config = input;
            self
        }
        pub fn human_task_config(mut self, input: crate::model::HumanTaskConfig) -> Self {
            self.human_task_config = Some(input);
            self
        }
        pub fn set_human_task_config(mut self, input: std::option::Option<crate::model::HumanTaskConfig>) -> Self {
            self.human_task_config = input;
            self
        }
        /// Appends an item to `Tags`.
        ///
        /// To override the contents of this collection use [`set_tags`](Self::set_tags).
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn labeling_job_output(mut self, input: crate::model::LabelingJobOutput) -> Self {
            self.labeling_job_output = Some(input);
            self
        }
        pub fn set_labeling_job_output(mut self, input: std::option::Option<crate::model::LabelingJobOutput>) -> Self {
            self.labeling_job_output = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLabelingJobOutput`](crate::output::DescribeLabelingJobOutput)
        pub fn build(self) -> crate::output::DescribeLabelingJobOutput {
            crate::output::DescribeLabelingJobOutput {
                labeling_job_status: self.labeling_job_status,
                label_counters: self.label_counters,
                failure_reason: self.failure_reason,
                creation_time: self.creation_time,
                last_modified_time: self.last_modified_time,
                job_reference_code: self.job_reference_code,
                labeling_job_name: self.labeling_job_name,
                labeling_job_arn: self.labeling_job_arn,
                label_attribute_name: self.label_attribute_name,
                input_config: self.input_config,
                output_config: self.output_config,
                role_arn: self.role_arn,
                label_category_config_s3_uri: self.label_category_config_s3_uri,
                stopping_conditions: self.stopping_conditions,
                labeling_job_algorithms_config: self.labeling_job_algorithms_config,
                human_task_config: self.human_task_config,
                tags: self.tags,
                labeling_job_output: self.labeling_job_output,
            }
        }
    }
}
impl DescribeLabelingJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeLabelingJobOutput`](crate::output::DescribeLabelingJobOutput)
    pub fn builder() -> crate::output::describe_labeling_job_output::Builder {
        crate::output::describe_labeling_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListLabelingJobsOutput {
    #[serde(rename = "LabelingJobSummaryList")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_summary_list: std::option::Option<std::vec::Vec<crate::model::LabelingJobSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListLabelingJobsOutput {
    pub fn labeling_job_summary_list(&self) -> std::option::Option<&[crate::model::LabelingJobSummary]> {
        self.labeling_job_summary_list.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListLabelingJobsOutput`](crate::output::ListLabelingJobsOutput)
pub mod list_labeling_jobs_output {
    /// A builder for [`ListLabelingJobsOutput`](crate::output::ListLabelingJobsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_summary_list: std::option::Option<std::vec::Vec<crate::model::LabelingJobSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `LabelingJobSummaryList`.
        ///
        /// To override the contents of this collection use [`set_labeling_job_summary_list`](Self::set_labeling_job_summary_list).
        pub fn labeling_job_summary_list(mut self, input: impl Into<crate::model::LabelingJobSummary>) -> Self {
            let mut v = self.labeling_job_summary_list.unwrap_or_default();
            v.push(input.into());
            self.labeling_job_summary_list = Some(v);
            self
        }
        pub fn set_labeling_job_summary_list(mut self, input: std::option::Option<std::vec::Vec<crate::model::LabelingJobSummary>>) -> Self {
            self.labeling_job_summary_list = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListLabelingJobsOutput`](crate::output::ListLabelingJobsOutput)
        pub fn build(self) -> crate::output::ListLabelingJobsOutput {
            crate::output::ListLabelingJobsOutput {
                labeling_job_summary_list: self.labeling_job_summary_list,
                next_token: self.next_token,
            }
        }
    }
}
impl ListLabelingJobsOutput {
    /// Creates a new builder-style object to manufacture [`ListLabelingJobsOutput`](crate::output::ListLabelingJobsOutput)
    pub fn builder() -> crate::output::list_labeling_jobs_output::Builder {
        crate::output::list_labeling_jobs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopLabelingJobOutput {}
/// See [`StopLabelingJobOutput`](crate::output::StopLabelingJobOutput)
pub mod stop_labeling_job_output {
    /// A builder for [`StopLabelingJobOutput`](crate::output::StopLabelingJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`StopLabelingJobOutput`](crate::output::StopLabelingJobOutput)
        pub fn build(self) -> crate::output::StopLabelingJobOutput {
            crate::output::StopLabelingJobOutput {}
        }
    }
}
impl StopLabelingJobOutput {
    /// Creates a new builder-style object to manufacture [`StopLabelingJobOutput`](crate::output::StopLabelingJobOutput)
    pub fn builder() -> crate::output::stop_labeling_job_output::Builder {
        crate::output::stop_labeling_job_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateFlowDefinitionOutput {
    #[serde(rename = "FlowDefinitionArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_arn: std::option::Option<std::string::String>,
}
impl CreateFlowDefinitionOutput {
    pub fn flow_definition_arn(&self) -> std::option::Option<&str> {
        self.flow_definition_arn.as_deref()
    }
}
/// See [`CreateFlowDefinitionOutput`](crate::output::CreateFlowDefinitionOutput)
pub mod create_flow_definition_output {
    /// A builder for [`CreateFlowDefinitionOutput`](crate::output::CreateFlowDefinitionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn flow_definition_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_arn = Some(input.into());
            self
        }
        pub fn set_flow_definition_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateFlowDefinitionOutput`](crate::output::CreateFlowDefinitionOutput)
        pub fn build(self) -> crate::output::CreateFlowDefinitionOutput {
            crate::output::CreateFlowDefinitionOutput {
                flow_definition_arn: self.flow_definition_arn,
            }
        }
    }
}
impl CreateFlowDefinitionOutput {
    /// Creates a new builder-style object to manufacture [`CreateFlowDefinitionOutput`](crate::output::CreateFlowDefinitionOutput)
    pub fn builder() -> crate::output::create_flow_definition_output::Builder {
        crate::output::create_flow_definition_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeFlowDefinitionOutput {
    #[serde(rename = "FlowDefinitionArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_arn: std::option::Option<std::string::String>,
    #[serde(rename = "FlowDefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_name: std::option::Option<std::string::String>,
    #[serde(rename = "FlowDefinitionStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_status: std::option::Option<crate::model::FlowDefinitionStatus>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "HumanLoopRequestSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_loop_request_source: std::option::Option<crate::model::HumanLoopRequestSource>,
    #[serde(rename = "HumanLoopActivationConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_loop_activation_config: std::option::Option<crate::model::HumanLoopActivationConfig>,
    #[serde(rename = "HumanLoopConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub human_loop_config: std::option::Option<crate::model::HumanLoopConfig>,
    #[serde(rename = "OutputConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_config: std::option::Option<crate::model::FlowDefinitionOutputConfig>,
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
}
impl DescribeFlowDefinitionOutput {
    pub fn flow_definition_arn(&self) -> std::option::Option<&str> {
        self.flow_definition_arn.as_deref()
    }

    pub fn flow_definition_name(&self) -> std::option::Option<&str> {
        self.flow_definition_name.as_deref()
    }

    pub fn flow_definition_status(&self) -> std::option::Option<&crate::model::FlowDefinitionStatus> {
        self.flow_definition_status.as_ref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn human_loop_request_source(&self) -> std::option::Option<&crate::model::HumanLoopRequestSource> {
        self.human_loop_request_source.as_ref()
    }

    pub fn human_loop_activation_config(&self) -> std::option::Option<&crate::model::HumanLoopActivationConfig> {
        self.human_loop_activation_config.as_ref()
    }

    pub fn human_loop_config(&self) -> std::option::Option<&crate::model::HumanLoopConfig> {
        self.human_loop_config.as_ref()
    }

    pub fn output_config(&self) -> std::option::Option<&crate::model::FlowDefinitionOutputConfig> {
        self.output_config.as_ref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }
}
/// See [`DescribeFlowDefinitionOutput`](crate::output::DescribeFlowDefinitionOutput)
pub mod describe_flow_definition_output {
    /// A builder for [`DescribeFlowDefinitionOutput`](crate::output::DescribeFlowDefinitionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_arn: std::option::Option<std::string::String>,
        flow_definition_name: std::option::Option<std::string::String>,
        flow_definition_status: std::option::Option<crate::model::FlowDefinitionStatus>,
        creation_time: std::option::Option<smithy_types::Instant>,
        human_loop_request_source: std::option::Option<crate::model::HumanLoopRequestSource>,
        human_loop_activation_config: std::option::Option<crate::model::HumanLoopActivationConfig>,
        human_loop_config: std::option::Option<crate::model::HumanLoopConfig>,
        output_config: std::option::Option<crate::model::FlowDefinitionOutputConfig>,
        role_arn: std::option::Option<std::string::String>,
        failure_reason: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn flow_definition_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_arn = Some(input.into());
            self
        }
        pub fn set_flow_definition_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_arn = input;
            self
        }
        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_name = Some(input.into());
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_name = input;
            self
        }
        pub fn flow_definition_status(mut self, input: crate::model::FlowDefinitionStatus) -> Self {
            self.flow_definition_status = Some(input);
            self
        }
        pub fn set_flow_definition_status(mut self, input: std::option::Option<crate::model::FlowDefinitionStatus>) -> Self {
            self.flow_definition_status = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn human_loop_request_source(mut self, input: crate::model::HumanLoopRequestSource) -> Self {
            self.human_loop_request_source = Some(input);
            self
        }
        pub fn set_human_loop_request_source(mut self, input: std::option::Option<crate::model::HumanLoopRequestSource>) -> Self {
            self.human_loop_request_source = input;
            self
        }
        pub fn human_loop_activation_config(mut self, input: crate::model::HumanLoopActivationConfig) -> Self {
            self.human_loop_activation_config = Some(input);
            self
        }
        pub fn set_human_loop_activation_config(mut self, input: std::option::Option<crate::model::HumanLoopActivationConfig>) -> Self {
            self.human_loop_activation_config = input;
            self
        }
        pub fn human_loop_config(mut self, input: crate::model::HumanLoopConfig) -> Self {
            self.human_loop_config = Some(input);
            self
        }
        pub fn set_human_loop_config(mut self, input: std::option::Option<crate::model::HumanLoopConfig>) -> Self {
            self.human_loop_config = input;
            self
        }
        pub fn output_config(mut self, input: crate::model::FlowDefinitionOutputConfig) -> Self {
            self.output_config = Some(input);
            self
        }
        pub fn set_output_config(mut self, input: std::option::Option<crate::model::FlowDefinitionOutputConfig>) -> Self {
            self.output_config = input;
            self
        }
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeFlowDefinitionOutput`](crate::output::DescribeFlowDefinitionOutput)
        pub fn build(self) -> crate::output::DescribeFlowDefinitionOutput {
            crate::output::DescribeFlowDefinitionOutput {
                flow_definition_arn: self.flow_definition_arn,
                flow_definition_name: self.flow_definition_name,
                flow_definition_status: self.flow_definition_status,
                creation_time: self.creation_time,
                human_loop_request_source: self.human_loop_request_source,
                human_loop_activation_config: self.human_loop_activation_config,
                human_loop_config: self.human_loop_config,
                output_config: self.output_config,
                role_arn: self.role_arn,
                failure_reason: self.failure_reason,
            }
        }
    }
}
impl DescribeFlowDefinitionOutput {
    /// Creates a new builder-style object to manufacture [`DescribeFlowDefinitionOutput`](crate::output::DescribeFlowDefinitionOutput)
    pub fn builder() -> crate::output::describe_flow_definition_output::Builder {
        crate::output::describe_flow_definition_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListFlowDefinitionsOutput {
    #[serde(rename = "FlowDefinitionSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_summaries: std::option::Option<std::vec::Vec<crate::model::FlowDefinitionSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListFlowDefinitionsOutput {
    pub fn flow_definition_summaries(&self) -> std::option::Option<&[crate::model::FlowDefinitionSummary]> {
        self.flow_definition_summaries.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListFlowDefinitionsOutput`](crate::output::ListFlowDefinitionsOutput)
pub mod list_flow_definitions_output {
    /// A builder for [`ListFlowDefinitionsOutput`](crate::output::ListFlowDefinitionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_summaries: std::option::Option<std::vec::Vec<crate::model::FlowDefinitionSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `FlowDefinitionSummaries`.
        ///
        /// To override the contents of this collection use [`set_flow_definition_summaries`](Self::set_flow_definition_summaries).
        pub fn flow_definition_summaries(mut self, input: impl Into<crate::model::FlowDefinitionSummary>) -> Self {
            let mut v = self.flow_definition_summaries.unwrap_or_default();
            v.push(input.into());
            self.flow_definition_summaries = Some(v);
            self
        }
        pub fn set_flow_definition_summaries(mut self, input: std::option::Option<std::vec::Vec<crate::model::FlowDefinitionSummary>>) -> Self {
            self.flow_definition_summaries = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListFlowDefinitionsOutput`](crate::output::ListFlowDefinitionsOutput)
        pub fn build(self) -> crate::output::ListFlowDefinitionsOutput {
            crate::output::ListFlowDefinitionsOutput {
                flow_definition_summaries: self.flow_definition_summaries,
                next_token: self.next_token,
            }
        }
    }
}
impl ListFlowDefinitionsOutput {
    /// Creates a new builder-style object to manufacture [`ListFlowDefinitionsOutput`](crate::output::ListFlowDefinitionsOutput)
    pub fn builder() -> crate::output::list_flow_definitions_output::Builder {
        crate::output::list_flow_definitions_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteFlowDefinitionOutput {}
/// See [`DeleteFlowDefinitionOutput`](crate::output::DeleteFlowDefinitionOutput)
pub mod delete_flow_definition_output {
    /// A builder for [`DeleteFlowDefinitionOutput`](crate::output::DeleteFlowDefinitionOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteFlowDefinitionOutput`](crate::output::DeleteFlowDefinitionOutput)
        pub fn build(self) -> crate::output::DeleteFlowDefinitionOutput {
            crate::output::DeleteFlowDefinitionOutput {}
        }
    }
}
impl DeleteFlowDefinitionOutput {
    /// Creates a new builder-style object to manufacture [`DeleteFlowDefinitionOutput`](crate::output::DeleteFlowDefinitionOutput)
    pub fn builder() -> crate::output::delete_flow_definition_output::Builder {
        crate::output::delete_flow_definition_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateEndpointConfigOutput {
    #[serde(rename = "EndpointConfigArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_arn: std::option::Option<std::string::String>,
}
impl CreateEndpointConfigOutput {
    pub fn endpoint_config_arn(&self) -> std::option::Option<&str> {
        self.endpoint_config_arn.as_deref()
    }
}
/// See [`CreateEndpointConfigOutput`](crate::output::CreateEndpointConfigOutput)
pub mod create_endpoint_config_output {
    /// A builder for [`CreateEndpointConfigOutput`](crate::output::CreateEndpointConfigOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_config_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn endpoint_config_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_config_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateEndpointConfigOutput`](crate::output::CreateEndpointConfigOutput)
        pub fn build(self) -> crate::output::CreateEndpointConfigOutput {
            crate::output::CreateEndpointConfigOutput {
                endpoint_config_arn: self.endpoint_config_arn,
            }
        }
    }
}
impl CreateEndpointConfigOutput {
    /// Creates a new builder-style object to manufacture [`CreateEndpointConfigOutput`](crate::output::CreateEndpointConfigOutput)
    pub fn builder() -> crate::output::create_endpoint_config_output::Builder {
        crate::output::create_endpoint_config_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeEndpointConfigOutput {
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointConfigArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_arn: std::option::Option<std::string::String>,
    #[serde(rename = "ProductionVariants")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub production_variants: std::option::Option<std::vec::Vec<crate::model::ProductionVariant>>,
    #[serde(rename = "DataCaptureConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_capture_config: std::option::Option<crate::model::DataCaptureConfig>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
}
impl DescribeEndpointConfigOutput {
    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }

    pub fn endpoint_config_arn(&self) -> std::option::Option<&str> {
        self.endpoint_config_arn.as_deref()
    }

    pub fn production_variants(&self) -> std::option::Option<&[crate::model::ProductionVariant]> {
        self.production_variants.as_deref()
    }

    pub fn data_capture_config(&self) -> std::option::Option<&crate::model::DataCaptureConfig> {
        self.data_capture_config.as_ref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }
}
/// See [`DescribeEndpointConfigOutput`](crate::output::DescribeEndpointConfigOutput)
pub mod describe_endpoint_config_output {
    /// A builder for [`DescribeEndpointConfigOutput`](crate::output::DescribeEndpointConfigOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_config_name: std::option::Option<std::string::String>,
        endpoint_config_arn: std::option::Option<std::string::String>,
        production_variants: std::option::Option<std::vec::Vec<crate::model::ProductionVariant>>,
        data_capture_config: std::option::Option<crate::model::DataCaptureConfig>,
        kms_key_id: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_name = Some(input.into());
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_name = input;
            self
        }
        pub fn endpoint_config_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_config_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_arn = input;
            self
        }
        /// Appends an item to `ProductionVariants`.
        ///
        /// To override the contents of this collection use [`set_production_variants`](Self::set_production_variants).
        pub fn production_variants(mut self, input: impl Into<crate::model::ProductionVariant>) -> Self {
            let mut v = self.production_variants.unwrap_or_default();
            v.push(input.into());
            self.production_variants = Some(v);
            self
        }
        pub fn set_production_variants(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProductionVariant>>) -> Self {
            self.production_variants = input;
            self
        }
        pub fn data_capture_config(mut self, input: crate::model::DataCaptureConfig) -> Self {
            self.data_capture_config = Some(input);
            self
        }
        pub fn set_data_capture_config(mut self, input: std::option::Option<crate::model::DataCaptureConfig>) -> Self {
            self.data_capture_config = input;
            self
        }
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEndpointConfigOutput`](crate::output::DescribeEndpointConfigOutput)
        pub fn build(self) -> crate::output::DescribeEndpointConfigOutput {
            crate::output::DescribeEndpointConfigOutput {
                endpoint_config_name: self.endpoint_config_name,
                endpoint_config_arn: self.endpoint_config_arn,
                production_variants: self.production_variants,
                data_capture_config: self.data_capture_config,
                kms_key_id: self.kms_key_id,
                creation_time: self.creation_time,
            }
        }
    }
}
impl DescribeEndpointConfigOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointConfigOutput`](crate::output::DescribeEndpointConfigOutput)
    pub fn builder() -> crate::output::describe_endpoint_config_output::Builder {
        crate::output::describe_endpoint_config_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListEndpointConfigsOutput {
    #[serde(rename = "EndpointConfigs")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_configs: std::option::Option<std::vec::Vec<crate::model::EndpointConfigSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListEndpointConfigsOutput {
    pub fn endpoint_configs(&self) -> std::option::Option<&[crate::model::EndpointConfigSummary]> {
        self.endpoint_configs.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListEndpointConfigsOutput`](crate::output::ListEndpointConfigsOutput)
pub mod list_endpoint_configs_output {
    /// A builder for [`ListEndpointConfigsOutput`](crate::output::ListEndpointConfigsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_configs: std::option::Option<std::vec::Vec<crate::model::EndpointConfigSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `EndpointConfigs`.
        ///
        /// To override the contents of this collection use [`set_endpoint_configs`](Self::set_endpoint_configs).
        pub fn endpoint_configs(mut self, input: impl Into<crate::model::EndpointConfigSummary>) -> Self {
            let mut v = self.endpoint_configs.unwrap_or_default();
            v.push(input.into());
            self.endpoint_configs = Some(v);
            self
        }
        pub fn set_endpoint_configs(mut self, input: std::option::Option<std::vec::Vec<crate::model::EndpointConfigSummary>>) -> Self {
            self.endpoint_configs = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListEndpointConfigsOutput`](crate::output::ListEndpointConfigsOutput)
        pub fn build(self) -> crate::output::ListEndpointConfigsOutput {
            crate::output::ListEndpointConfigsOutput {
                endpoint_configs: self.endpoint_configs,
                next_token: self.next_token,
            }
        }
    }
}
impl ListEndpointConfigsOutput {
    /// Creates a new builder-style object to manufacture [`ListEndpointConfigsOutput`](crate::output::ListEndpointConfigsOutput)
    pub fn builder() -> crate::output::list_endpoint_configs_output::Builder {
        crate::output::list_endpoint_configs_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteEndpointConfigOutput {}
/// See [`DeleteEndpointConfigOutput`](crate::output::DeleteEndpointConfigOutput)
pub mod delete_endpoint_config_output {
    /// A builder for [`DeleteEndpointConfigOutput`](crate::output::DeleteEndpointConfigOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteEndpointConfigOutput`](crate::output::DeleteEndpointConfigOutput)
        pub fn build(self) -> crate::output::DeleteEndpointConfigOutput {
            crate::output::DeleteEndpointConfigOutput {}
        }
    }
}
impl DeleteEndpointConfigOutput {
    /// Creates a new builder-style object to manufacture [`DeleteEndpointConfigOutput`](crate::output::DeleteEndpointConfigOutput)
    pub fn builder() -> crate::output::delete_endpoint_config_output::Builder {
        crate::output::delete_endpoint_config_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateEndpointOutput {
    #[serde(rename = "EndpointArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_arn: std::option::Option<std::string::String>,
}
impl CreateEndpointOutput {
    pub fn endpoint_arn(&self) -> std::option::Option<&str> {
        self.endpoint_arn.as_deref()
    }
}
/// See [`CreateEndpointOutput`](crate::output::CreateEndpointOutput)
pub mod create_endpoint_output {
    /// A builder for [`CreateEndpointOutput`](crate::output::CreateEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn endpoint_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateEndpointOutput`](crate::output::CreateEndpointOutput)
        pub fn build(self) -> crate::output::CreateEndpointOutput {
            crate::output::CreateEndpointOutput {
                endpoint_arn: self.endpoint_arn,
            }
        }
    }
}
impl CreateEndpointOutput {
    /// Creates a new builder-style object to manufacture [`CreateEndpointOutput`](crate::output::CreateEndpointOutput)
    pub fn builder() -> crate::output::create_endpoint_output::Builder {
        crate::output::create_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeEndpointOutput {
    #[serde(rename = "EndpointName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_name: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_arn: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "ProductionVariants")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub production_variants: std::option::Option<std::vec::Vec<crate::model::ProductionVariantSummary>>,
    #[serde(rename = "DataCaptureConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_capture_config: std::option::Option<crate::model::DataCaptureConfigSummary>,
    #[serde(rename = "EndpointStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_status: std::option::Option<crate::model::EndpointStatus>,
    #[serde(rename = "FailureReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_reason: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTime")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time: std::option::Option<smithy_types::Instant>,
}
impl DescribeEndpointOutput {
    pub fn endpoint_name(&self) -> std::option::Option<&str> {
        self.endpoint_name.as_deref()
    }

    pub fn endpoint_arn(&self) -> std::option::Option<&str> {
        self.endpoint_arn.as_deref()
    }

    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }

    pub fn production_variants(&self) -> std::option::Option<&[crate::model::ProductionVariantSummary]> {
        self.production_variants.as_deref()
    }

    pub fn data_capture_config(&self) -> std::option::Option<&crate::model::DataCaptureConfigSummary> {
        self.data_capture_config.as_ref()
    }

    pub fn endpoint_status(&self) -> std::option::Option<&crate::model::EndpointStatus> {
        self.endpoint_status.as_ref()
    }

    pub fn failure_reason(&self) -> std::option::Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn creation_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time.as_ref()
    }

    pub fn last_modified_time(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time.as_ref()
    }
}
/// See [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
pub mod describe_endpoint_output {
    /// A builder for [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_name: std::option::Option<std::string::String>,
        endpoint_arn: std::option::Option<std::string::String>,
        endpoint_config_name: std::option::Option<std::string::String>,
        production_variants: std::option::Option<std::vec::Vec<crate::model::ProductionVariantSummary>>,
        data_capture_config: std::option::Option<crate::model::DataCaptureConfigSummary>,
        endpoint_status: std::option::Option<crate::model::EndpointStatus>,
        failure_reason: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_modified_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn endpoint_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_name = Some(input.into());
            self
        }
        pub fn set_endpoint_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_name = input;
            self
        }
        pub fn endpoint_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_name = Some(input.into());
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_name = input;
            self
        }
        /// Appends an item to `ProductionVariants`.
        ///
        /// To override the contents of this collection use [`set_production_variants`](Self::set_production_variants).
        pub fn production_variants(mut self, input: impl Into<crate::model::ProductionVariantSummary>) -> Self {
            let mut v = self.production_variants.unwrap_or_default();
            v.push(input.into());
            self.production_variants = Some(v);
            self
        }
        pub fn set_production_variants(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProductionVariantSummary>>) -> Self {
            self.production_variants = input;
            self
        }
        pub fn data_capture_config(mut self, input: crate::model::DataCaptureConfigSummary) -> Self {
            self.data_capture_config = Some(input);
            self
        }
        pub fn set_data_capture_config(mut self, input: std::option::Option<crate::model::DataCaptureConfigSummary>) -> Self {
            self.data_capture_config = input;
            self
        }
        pub fn endpoint_status(mut self, input: crate::model::EndpointStatus) -> Self {
            self.endpoint_status = Some(input);
            self
        }
        pub fn set_endpoint_status(mut self, input: std::option::Option<crate::model::EndpointStatus>) -> Self {
            self.endpoint_status = input;
            self
        }
        pub fn failure_reason(mut self, input: impl Into<std::string::String>) -> Self {
            self.failure_reason = Some(input.into());
            self
        }
        pub fn set_failure_reason(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.failure_reason = input;
            self
        }
        pub fn creation_time(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time = Some(input);
            self
        }
        pub fn set_creation_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time = input;
            self
        }
        pub fn last_modified_time(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time = Some(input);
            self
        }
        pub fn set_last_modified_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
        pub fn build(self) -> crate::output::DescribeEndpointOutput {
            crate::output::DescribeEndpointOutput {
                endpoint_name: self.endpoint_name,
                endpoint_arn: self.endpoint_arn,
                endpoint_config_name: self.endpoint_config_name,
                production_variants: self.production_variants,
                data_capture_config: self.data_capture_config,
                endpoint_status: self.endpoint_status,
                failure_reason: self.failure_reason,
                creation_time: self.creation_time,
                last_modified_time: self.last_modified_time,
            }
        }
    }
}
impl DescribeEndpointOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
    pub fn builder() -> crate::output::describe_endpoint_output::Builder {
        crate::output::describe_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListEndpointsOutput {
    #[serde(rename = "Endpoints")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoints: std::option::Option<std::vec::Vec<crate::model::EndpointSummary>>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListEndpointsOutput {
    pub fn endpoints(&self) -> std::option::Option<&[crate::model::EndpointSummary]> {
        self.endpoints.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
/// See [`ListEndpointsOutput`](crate::output::ListEndpointsOutput)
pub mod list_endpoints_output {
    /// A builder for [`ListEndpointsOutput`](crate::output::ListEndpointsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoints: std::option::Option<std::vec::Vec<crate::model::EndpointSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// Appends an item to `Endpoints`.
        ///
        /// To override the contents of this collection use [`set_endpoints`](Self::set_endpoints).
        pub fn endpoints(mut self, input: impl Into<crate::model::EndpointSummary>) -> Self {
            let mut v = self.endpoints.unwrap_or_default();
            v.push(input.into());
            self.endpoints = Some(v);
            self
        }
        pub fn set_endpoints(mut self, input: std::option::Option<std::vec::Vec<crate::model::EndpointSummary>>) -> Self {
            self.endpoints = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListEndpointsOutput`](crate::output::ListEndpointsOutput)
        pub fn build(self) -> crate::output::ListEndpointsOutput {
            crate::output::ListEndpointsOutput {
                endpoints: self.endpoints,
                next_token: self.next_token,
            }
        }
    }
}
impl ListEndpointsOutput {
    /// Creates a new builder-style object to manufacture [`ListEndpointsOutput`](crate::output::ListEndpointsOutput)
    pub fn builder() -> crate::output::list_endpoints_output::Builder {
        crate::output::list_endpoints_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UpdateEndpointOutput {
    #[serde(rename = "EndpointArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_arn: std::option::Option<std::string::String>,
}
impl UpdateEndpointOutput {
    pub fn endpoint_arn(&self) -> std::option::Option<&str> {
        self.endpoint_arn.as_deref()
    }
}
/// See [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
pub mod update_endpoint_output {
    /// A builder for [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn endpoint_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_arn = Some(input.into());
            self
        }
        pub fn set_endpoint_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
        pub fn build(self) -> crate::output::UpdateEndpointOutput {
            crate::output::UpdateEndpointOutput {
                endpoint_arn: self.endpoint_arn,
            }
        }
    }
}
impl UpdateEndpointOutput {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointOutput`](crate::output::UpdateEndpointOutput)
    pub fn builder() -> crate::output::update_endpoint_output::Builder {
        crate::output::update_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteEndpointOutput {}
/// See [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput)
pub mod delete_endpoint_output {
    /// A builder for [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput)
        pub fn build(self) -> crate::output::DeleteEndpointOutput {
            crate::output::DeleteEndpointOutput {}
        }
    }
}
impl DeleteEndpointOutput {
    /// Creates a new builder-style object to manufacture [`DeleteEndpointOutput`](crate::output::DeleteEndpointOutput)
    pub fn builder() -> crate::output::delete_endpoint_output::Builder {
        crate::output::delete_endpoint_output::Builder::default()
    }
}
