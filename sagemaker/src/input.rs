/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct AddTagsInput {
    #[serde(rename = "ResourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl AddTagsInput {
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`AddTagsInput`](crate::input::AddTagsInput)
pub mod add_tags_input {
    /// A builder for [`AddTagsInput`](crate::input::AddTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
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
        /// Consumes the builder and constructs a [`AddTagsInput`](crate::input::AddTagsInput)
        pub fn build(self) -> crate::input::AddTagsInput {
            crate::input::AddTagsInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            }
        }
    }
}
impl AddTagsInput {
    /// Creates a new builder-style object to manufacture [`AddTagsInput`](crate::input::AddTagsInput)
    pub fn builder() -> crate::input::add_tags_input::Builder {
        crate::input::add_tags_input::Builder::default()
    }
}

impl AddTagsInput {
    /// Serializes this input into an Operation<[`AddTags`](crate::operation::AddTags)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::AddTags>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::AddTags::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "AddTags",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.AddTags")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteTagsInput {
    #[serde(rename = "ResourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "TagKeys")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl DeleteTagsInput {
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn tag_keys(&self) -> std::option::Option<&[std::string::String]> {
        self.tag_keys.as_deref()
    }
}
/// See [`DeleteTagsInput`](crate::input::DeleteTagsInput)
pub mod delete_tags_input {
    /// A builder for [`DeleteTagsInput`](crate::input::DeleteTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Appends an item to `TagKeys`.
        ///
        /// To override the contents of this collection use [`set_tag_keys`](Self::set_tag_keys).
        pub fn tag_keys(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(input.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.tag_keys = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteTagsInput`](crate::input::DeleteTagsInput)
        pub fn build(self) -> crate::input::DeleteTagsInput {
            crate::input::DeleteTagsInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            }
        }
    }
}
impl DeleteTagsInput {
    /// Creates a new builder-style object to manufacture [`DeleteTagsInput`](crate::input::DeleteTagsInput)
    pub fn builder() -> crate::input::delete_tags_input::Builder {
        crate::input::delete_tags_input::Builder::default()
    }
}

impl DeleteTagsInput {
    /// Serializes this input into an Operation<[`DeleteTags`](crate::operation::DeleteTags)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteTags>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteTags::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DeleteTags",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DeleteTags")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTagsInput {
    #[serde(rename = "ResourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}
impl ListTagsInput {
    pub fn resource_arn(&self) -> std::option::Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
/// See [`ListTagsInput`](crate::input::ListTagsInput)
pub mod list_tags_input {
    /// A builder for [`ListTagsInput`](crate::input::ListTagsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTagsInput`](crate::input::ListTagsInput)
        pub fn build(self) -> crate::input::ListTagsInput {
            crate::input::ListTagsInput {
                resource_arn: self.resource_arn,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListTagsInput {
    /// Creates a new builder-style object to manufacture [`ListTagsInput`](crate::input::ListTagsInput)
    pub fn builder() -> crate::input::list_tags_input::Builder {
        crate::input::list_tags_input::Builder::default()
    }
}

impl ListTagsInput {
    /// Serializes this input into an Operation<[`ListTags`](crate::operation::ListTags)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTags>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTags::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListTags",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListTags")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateNotebookInstanceInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    #[serde(rename = "SubnetId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<std::string::String>,
    #[serde(rename = "SecurityGroupIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    /// IAM role SageMaker assumes to act on your behalf.
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    #[serde(rename = "LifecycleConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "DirectInternetAccess")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub direct_internet_access: std::option::Option<crate::model::DirectInternetAccess>,
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
    #[serde(rename = "RootAccess")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub root_access: std::option::Option<crate::model::RootAccess>,
}
impl CreateNotebookInstanceInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }

    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    pub fn subnet_id(&self) -> std::option::Option<&str> {
        self.subnet_id.as_deref()
    }

    pub fn security_group_ids(&self) -> std::option::Option<&[std::string::String]> {
        self.security_group_ids.as_deref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn lifecycle_config_name(&self) -> std::option::Option<&str> {
        self.lifecycle_config_name.as_deref()
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
/// See [`CreateNotebookInstanceInput`](crate::input::CreateNotebookInstanceInput)
pub mod create_notebook_instance_input {
    /// A builder for [`CreateNotebookInstanceInput`](crate::input::CreateNotebookInstanceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
        instance_type: std::option::Option<crate::model::InstanceType>,
        subnet_id: std::option::Option<std::string::String>,
        security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        role_arn: std::option::Option<std::string::String>,
        kms_key_id: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        lifecycle_config_name: std::option::Option<std::string::String>,
        direct_internet_access: std::option::Option<crate::model::DirectInternetAccess>,
        volume_size_in_gb: std::option::Option<i32>,
        accelerator_types: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>,
        default_code_repository: std::option::Option<std::string::String>,
        additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
        root_access: std::option::Option<crate::model::RootAccess>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
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
        /// Appends an item to `SecurityGroupIds`.
        ///
        /// To override the contents of this collection use [`set_security_group_ids`](Self::set_security_group_ids).
        pub fn security_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
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
        pub fn lifecycle_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.lifecycle_config_name = Some(input.into());
            self
        }
        pub fn set_lifecycle_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lifecycle_config_name = input;
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
        /// Consumes the builder and constructs a [`CreateNotebookInstanceInput`](crate::input::CreateNotebookInstanceInput)
        pub fn build(self) -> crate::input::CreateNotebookInstanceInput {
            crate::input::CreateNotebookInstanceInput {
                notebook_instance_name: self.notebook_instance_name,
                instance_type: self.instance_type,
                subnet_id: self.subnet_id,
                security_group_ids: self.security_group_ids,
                role_arn: self.role_arn,
                kms_key_id: self.kms_key_id,
                tags: self.tags,
                lifecycle_config_name: self.lifecycle_config_name,
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
impl CreateNotebookInstanceInput {
    /// Creates a new builder-style object to manufacture [`CreateNotebookInstanceInput`](crate::input::CreateNotebookInstanceInput)
    pub fn builder() -> crate::input::create_notebook_instance_input::Builder {
        crate::input::create_notebook_instance_input::Builder::default()
    }
}

impl CreateNotebookInstanceInput {
    /// Serializes this input into an Operation<[`CreateNotebookInstance`](crate::operation::CreateNotebookInstance)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateNotebookInstance>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateNotebookInstance::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateNotebookInstance",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateNotebookInstance")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeNotebookInstanceInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
}
impl DescribeNotebookInstanceInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }
}
/// See [`DescribeNotebookInstanceInput`](crate::input::DescribeNotebookInstanceInput)
pub mod describe_notebook_instance_input {
    /// A builder for [`DescribeNotebookInstanceInput`](crate::input::DescribeNotebookInstanceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeNotebookInstanceInput`](crate::input::DescribeNotebookInstanceInput)
        pub fn build(self) -> crate::input::DescribeNotebookInstanceInput {
            crate::input::DescribeNotebookInstanceInput {
                notebook_instance_name: self.notebook_instance_name,
            }
        }
    }
}
impl DescribeNotebookInstanceInput {
    /// Creates a new builder-style object to manufacture [`DescribeNotebookInstanceInput`](crate::input::DescribeNotebookInstanceInput)
    pub fn builder() -> crate::input::describe_notebook_instance_input::Builder {
        crate::input::describe_notebook_instance_input::Builder::default()
    }
}

impl DescribeNotebookInstanceInput {
    /// Serializes this input into an Operation<[`DescribeNotebookInstance`](crate::operation::DescribeNotebookInstance)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeNotebookInstance>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeNotebookInstance::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeNotebookInstance",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeNotebookInstance")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UpdateNotebookInstanceInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
    #[serde(rename = "InstanceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<crate::model::InstanceType>,
    #[serde(rename = "RoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "LifecycleConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lifecycle_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "DisassociateLifecycleConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disassociate_lifecycle_config: std::option::Option<bool>,
    #[serde(rename = "VolumeSizeInGB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub volume_size_in_gb: std::option::Option<i32>,
    #[serde(rename = "DefaultCodeRepository")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_code_repository: std::option::Option<std::string::String>,
    #[serde(rename = "AdditionalCodeRepositories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "AcceleratorTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_types: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>,
    #[serde(rename = "DisassociateAcceleratorTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disassociate_accelerator_types: std::option::Option<bool>,
    #[serde(rename = "DisassociateDefaultCodeRepository")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disassociate_default_code_repository: std::option::Option<bool>,
    #[serde(rename = "DisassociateAdditionalCodeRepositories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub disassociate_additional_code_repositories: std::option::Option<bool>,
    #[serde(rename = "RootAccess")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub root_access: std::option::Option<crate::model::RootAccess>,
}
impl UpdateNotebookInstanceInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }

    pub fn instance_type(&self) -> std::option::Option<&crate::model::InstanceType> {
        self.instance_type.as_ref()
    }

    pub fn role_arn(&self) -> std::option::Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn lifecycle_config_name(&self) -> std::option::Option<&str> {
        self.lifecycle_config_name.as_deref()
    }

    pub fn disassociate_lifecycle_config(&self) -> std::option::Option<bool> {
        self.disassociate_lifecycle_config
    }

    pub fn volume_size_in_gb(&self) -> std::option::Option<i32> {
        self.volume_size_in_gb
    }

    pub fn default_code_repository(&self) -> std::option::Option<&str> {
        self.default_code_repository.as_deref()
    }

    pub fn additional_code_repositories(&self) -> std::option::Option<&[std::string::String]> {
        self.additional_code_repositories.as_deref()
    }

    pub fn accelerator_types(&self) -> std::option::Option<&[crate::model::NotebookInstanceAcceleratorType]> {
        self.accelerator_types.as_deref()
    }

    pub fn disassociate_accelerator_types(&self) -> std::option::Option<bool> {
        self.disassociate_accelerator_types
    }

    pub fn disassociate_default_code_repository(&self) -> std::option::Option<bool> {
        self.disassociate_default_code_repository
    }

    pub fn disassociate_additional_code_repositories(&self) -> std::option::Option<bool> {
        self.disassociate_additional_code_repositories
    }

    pub fn root_access(&self) -> std::option::Option<&crate::model::RootAccess> {
        self.root_access.as_ref()
    }
}
/// See [`UpdateNotebookInstanceInput`](crate::input::UpdateNotebookInstanceInput)
pub mod update_notebook_instance_input {
    /// A builder for [`UpdateNotebookInstanceInput`](crate::input::UpdateNotebookInstanceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
        instance_type: std::option::Option<crate::model::InstanceType>,
        role_arn: std::option::Option<std::string::String>,
        lifecycle_config_name: std::option::Option<std::string::String>,
        disassociate_lifecycle_config: std::option::Option<bool>,
        volume_size_in_gb: std::option::Option<i32>,
        default_code_repository: std::option::Option<std::string::String>,
        additional_code_repositories: std::option::Option<std::vec::Vec<std::string::String>>,
        accelerator_types: std::option::Option<std::vec::Vec<crate::model::NotebookInstanceAcceleratorType>>,
        disassociate_accelerator_types: std::option::Option<bool>,
        disassociate_default_code_repository: std::option::Option<bool>,
        disassociate_additional_code_repositories: std::option::Option<bool>,
        root_access: std::option::Option<crate::model::RootAccess>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
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
        pub fn role_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(input.into());
            self
        }
        pub fn set_role_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.role_arn = input;
            self
        }
        pub fn lifecycle_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.lifecycle_config_name = Some(input.into());
            self
        }
        pub fn set_lifecycle_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.lifecycle_config_name = input;
            self
        }
        pub fn disassociate_lifecycle_config(mut self, input: bool) -> Self {
            self.disassociate_lifecycle_config = Some(input);
            self
        }
        pub fn set_disassociate_lifecycle_config(mut self, input: std::option::Option<bool>) -> Self {
            self.disassociate_lifecycle_config = input;
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
        pub fn disassociate_accelerator_types(mut self, input: bool) -> Self {
            self.disassociate_accelerator_types = Some(input);
            self
        }
        pub fn set_disassociate_accelerator_types(mut self, input: std::option::Option<bool>) -> Self {
            self.disassociate_accelerator_types = input;
            self
        }
        pub fn disassociate_default_code_repository(mut self, input: bool) -> Self {
            self.disassociate_default_code_repository = Some(input);
            self
        }
        pub fn set_disassociate_default_code_repository(mut self, input: std::option::Option<bool>) -> Self {
            self.disassociate_default_code_repository = input;
            self
        }
        pub fn disassociate_additional_code_repositories(mut self, input: bool) -> Self {
            self.disassociate_additional_code_repositories = Some(input);
            self
        }
        pub fn set_disassociate_additional_code_repositories(mut self, input: std::option::Option<bool>) -> Self {
            self.disassociate_additional_code_repositories = input;
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
        /// Consumes the builder and constructs a [`UpdateNotebookInstanceInput`](crate::input::UpdateNotebookInstanceInput)
        pub fn build(self) -> crate::input::UpdateNotebookInstanceInput {
            crate::input::UpdateNotebookInstanceInput {
                notebook_instance_name: self.notebook_instance_name,
                instance_type: self.instance_type,
                role_arn: self.role_arn,
                lifecycle_config_name: self.lifecycle_config_name,
                disassociate_lifecycle_config: self.disassociate_lifecycle_config,
                volume_size_in_gb: self.volume_size_in_gb,
                default_code_repository: self.default_code_repository,
                additional_code_repositories: self.additional_code_repositories,
                accelerator_types: self.accelerator_types,
                disassociate_accelerator_types: self.disassociate_accelerator_types,
                disassociate_default_code_repository: self.disassociate_default_code_repository,
                disassociate_additional_code_repositories: self.disassociate_additional_code_repositories,
                root_access: self.root_access,
            }
        }
    }
}
impl UpdateNotebookInstanceInput {
    /// Creates a new builder-style object to manufacture [`UpdateNotebookInstanceInput`](crate::input::UpdateNotebookInstanceInput)
    pub fn builder() -> crate::input::update_notebook_instance_input::Builder {
        crate::input::update_notebook_instance_input::Builder::default()
    }
}

impl UpdateNotebookInstanceInput {
    /// Serializes this input into an Operation<[`UpdateNotebookInstance`](crate::operation::UpdateNotebookInstance)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateNotebookInstance>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateNotebookInstance::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "UpdateNotebookInstance",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.UpdateNotebookInstance")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteNotebookInstanceInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
}
impl DeleteNotebookInstanceInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }
}
/// See [`DeleteNotebookInstanceInput`](crate::input::DeleteNotebookInstanceInput)
pub mod delete_notebook_instance_input {
    /// A builder for [`DeleteNotebookInstanceInput`](crate::input::DeleteNotebookInstanceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteNotebookInstanceInput`](crate::input::DeleteNotebookInstanceInput)
        pub fn build(self) -> crate::input::DeleteNotebookInstanceInput {
            crate::input::DeleteNotebookInstanceInput {
                notebook_instance_name: self.notebook_instance_name,
            }
        }
    }
}
impl DeleteNotebookInstanceInput {
    /// Creates a new builder-style object to manufacture [`DeleteNotebookInstanceInput`](crate::input::DeleteNotebookInstanceInput)
    pub fn builder() -> crate::input::delete_notebook_instance_input::Builder {
        crate::input::delete_notebook_instance_input::Builder::default()
    }
}

impl DeleteNotebookInstanceInput {
    /// Serializes this input into an Operation<[`DeleteNotebookInstance`](crate::operation::DeleteNotebookInstance)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteNotebookInstance>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteNotebookInstance::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DeleteNotebookInstance",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DeleteNotebookInstance")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StartNotebookInstanceInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
}
impl StartNotebookInstanceInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }
}
/// See [`StartNotebookInstanceInput`](crate::input::StartNotebookInstanceInput)
pub mod start_notebook_instance_input {
    /// A builder for [`StartNotebookInstanceInput`](crate::input::StartNotebookInstanceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        /// Consumes the builder and constructs a [`StartNotebookInstanceInput`](crate::input::StartNotebookInstanceInput)
        pub fn build(self) -> crate::input::StartNotebookInstanceInput {
            crate::input::StartNotebookInstanceInput {
                notebook_instance_name: self.notebook_instance_name,
            }
        }
    }
}
impl StartNotebookInstanceInput {
    /// Creates a new builder-style object to manufacture [`StartNotebookInstanceInput`](crate::input::StartNotebookInstanceInput)
    pub fn builder() -> crate::input::start_notebook_instance_input::Builder {
        crate::input::start_notebook_instance_input::Builder::default()
    }
}

impl StartNotebookInstanceInput {
    /// Serializes this input into an Operation<[`StartNotebookInstance`](crate::operation::StartNotebookInstance)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StartNotebookInstance>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::StartNotebookInstance::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "StartNotebookInstance",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.StartNotebookInstance")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopNotebookInstanceInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
}
impl StopNotebookInstanceInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }
}
/// See [`StopNotebookInstanceInput`](crate::input::StopNotebookInstanceInput)
pub mod stop_notebook_instance_input {
    /// A builder for [`StopNotebookInstanceInput`](crate::input::StopNotebookInstanceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        /// Consumes the builder and constructs a [`StopNotebookInstanceInput`](crate::input::StopNotebookInstanceInput)
        pub fn build(self) -> crate::input::StopNotebookInstanceInput {
            crate::input::StopNotebookInstanceInput {
                notebook_instance_name: self.notebook_instance_name,
            }
        }
    }
}
impl StopNotebookInstanceInput {
    /// Creates a new builder-style object to manufacture [`StopNotebookInstanceInput`](crate::input::StopNotebookInstanceInput)
    pub fn builder() -> crate::input::stop_notebook_instance_input::Builder {
        crate::input::stop_notebook_instance_input::Builder::default()
    }
}

impl StopNotebookInstanceInput {
    /// Serializes this input into an Operation<[`StopNotebookInstance`](crate::operation::StopNotebookInstance)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StopNotebookInstance>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::StopNotebookInstance::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "StopNotebookInstance",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.StopNotebookInstance")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListNotebookInstancesInput {
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::NotebookInstanceSortKey>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::NotebookInstanceSortOrder>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::NotebookInstanceStatus>,
    #[serde(rename = "NotebookInstanceLifecycleConfigNameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_lifecycle_config_name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "DefaultCodeRepositoryContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default_code_repository_contains: std::option::Option<std::string::String>,
    #[serde(rename = "AdditionalCodeRepositoryEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub additional_code_repository_equals: std::option::Option<std::string::String>,
}
impl ListNotebookInstancesInput {
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn sort_by(&self) -> std::option::Option<&crate::model::NotebookInstanceSortKey> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::NotebookInstanceSortOrder> {
        self.sort_order.as_ref()
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn last_modified_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_before.as_ref()
    }

    pub fn last_modified_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_after.as_ref()
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::NotebookInstanceStatus> {
        self.status_equals.as_ref()
    }

    pub fn notebook_instance_lifecycle_config_name_contains(&self) -> std::option::Option<&str> {
        self.notebook_instance_lifecycle_config_name_contains.as_deref()
    }

    pub fn default_code_repository_contains(&self) -> std::option::Option<&str> {
        self.default_code_repository_contains.as_deref()
    }

    pub fn additional_code_repository_equals(&self) -> std::option::Option<&str> {
        self.additional_code_repository_equals.as_deref()
    }
}
/// See [`ListNotebookInstancesInput`](crate::input::ListNotebookInstancesInput)
pub mod list_notebook_instances_input {
    /// A builder for [`ListNotebookInstancesInput`](crate::input::ListNotebookInstancesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        sort_by: std::option::Option<crate::model::NotebookInstanceSortKey>,
        sort_order: std::option::Option<crate::model::NotebookInstanceSortOrder>,
        name_contains: std::option::Option<std::string::String>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        creation_time_after: std::option::Option<smithy_types::Instant>,
        last_modified_time_before: std::option::Option<smithy_types::Instant>,
        last_modified_time_after: std::option::Option<smithy_types::Instant>,
        status_equals: std::option::Option<crate::model::NotebookInstanceStatus>,
        notebook_instance_lifecycle_config_name_contains: std::option::Option<std::string::String>,
        default_code_repository_contains: std::option::Option<std::string::String>,
        additional_code_repository_equals: std::option::Option<std::string::String>,
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::NotebookInstanceSortKey) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::NotebookInstanceSortKey>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::NotebookInstanceSortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::NotebookInstanceSortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_before = Some(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_before = input;
            self
        }
        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_after = Some(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_after = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::NotebookInstanceStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::NotebookInstanceStatus>) -> Self {
            self.status_equals = input;
            self
        }
        pub fn notebook_instance_lifecycle_config_name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_lifecycle_config_name_contains = Some(input.into());
            self
        }
        pub fn set_notebook_instance_lifecycle_config_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_lifecycle_config_name_contains = input;
            self
        }
        pub fn default_code_repository_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.default_code_repository_contains = Some(input.into());
            self
        }
        pub fn set_default_code_repository_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.default_code_repository_contains = input;
            self
        }
        pub fn additional_code_repository_equals(mut self, input: impl Into<std::string::String>) -> Self {
            self.additional_code_repository_equals = Some(input.into());
            self
        }
        pub fn set_additional_code_repository_equals(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.additional_code_repository_equals = input;
            self
        }
        /// Consumes the builder and constructs a [`ListNotebookInstancesInput`](crate::input::ListNotebookInstancesInput)
        pub fn build(self) -> crate::input::ListNotebookInstancesInput {
            crate::input::ListNotebookInstancesInput {
                next_token: self.next_token,
                max_results: self.max_results,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                name_contains: self.name_contains,
                creation_time_before: self.creation_time_before,
                creation_time_after: self.creation_time_after,
                last_modified_time_before: self.last_modified_time_before,
                last_modified_time_after: self.last_modified_time_after,
                status_equals: self.status_equals,
                notebook_instance_lifecycle_config_name_contains: self.notebook_instance_lifecycle_config_name_contains,
                default_code_repository_contains: self.default_code_repository_contains,
                additional_code_repository_equals: self.additional_code_repository_equals,
            }
        }
    }
}
impl ListNotebookInstancesInput {
    /// Creates a new builder-style object to manufacture [`ListNotebookInstancesInput`](crate::input::ListNotebookInstancesInput)
    pub fn builder() -> crate::input::list_notebook_instances_input::Builder {
        crate::input::list_notebook_instances_input::Builder::default()
    }
}

impl ListNotebookInstancesInput {
    /// Serializes this input into an Operation<[`ListNotebookInstances`](crate::operation::ListNotebookInstances)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListNotebookInstances>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListNotebookInstances::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListNotebookInstances",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListNotebookInstances")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreatePresignedNotebookInstanceUrlInput {
    #[serde(rename = "NotebookInstanceName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notebook_instance_name: std::option::Option<std::string::String>,
    #[serde(rename = "SessionExpirationDurationInSeconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub session_expiration_duration_in_seconds: std::option::Option<i32>,
}
impl CreatePresignedNotebookInstanceUrlInput {
    pub fn notebook_instance_name(&self) -> std::option::Option<&str> {
        self.notebook_instance_name.as_deref()
    }

    pub fn session_expiration_duration_in_seconds(&self) -> std::option::Option<i32> {
        self.session_expiration_duration_in_seconds
    }
}
/// See [`CreatePresignedNotebookInstanceUrlInput`](crate::input::CreatePresignedNotebookInstanceUrlInput)
pub mod create_presigned_notebook_instance_url_input {
    /// A builder for [`CreatePresignedNotebookInstanceUrlInput`](crate::input::CreatePresignedNotebookInstanceUrlInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        notebook_instance_name: std::option::Option<std::string::String>,
        session_expiration_duration_in_seconds: std::option::Option<i32>,
    }
    impl Builder {
        pub fn notebook_instance_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.notebook_instance_name = Some(input.into());
            self
        }
        pub fn set_notebook_instance_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.notebook_instance_name = input;
            self
        }
        pub fn session_expiration_duration_in_seconds(mut self, input: i32) -> Self {
            self.session_expiration_duration_in_seconds = Some(input);
            self
        }
        pub fn set_session_expiration_duration_in_seconds(mut self, input: std::option::Option<i32>) -> Self {
            self.session_expiration_duration_in_seconds = input;
            self
        }
        /// Consumes the builder and constructs a [`CreatePresignedNotebookInstanceUrlInput`](crate::input::CreatePresignedNotebookInstanceUrlInput)
        pub fn build(self) -> crate::input::CreatePresignedNotebookInstanceUrlInput {
            crate::input::CreatePresignedNotebookInstanceUrlInput {
                notebook_instance_name: self.notebook_instance_name,
                session_expiration_duration_in_seconds: self.session_expiration_duration_in_seconds,
            }
        }
    }
}
impl CreatePresignedNotebookInstanceUrlInput {
    /// Creates a new builder-style object to manufacture [`CreatePresignedNotebookInstanceUrlInput`](crate::input::CreatePresignedNotebookInstanceUrlInput)
    pub fn builder() -> crate::input::create_presigned_notebook_instance_url_input::Builder {
        crate::input::create_presigned_notebook_instance_url_input::Builder::default()
    }
}

impl CreatePresignedNotebookInstanceUrlInput {
    /// Serializes this input into an Operation<[`CreatePresignedNotebookInstanceUrl`](crate::operation::CreatePresignedNotebookInstanceUrl)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreatePresignedNotebookInstanceUrl>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreatePresignedNotebookInstanceUrl::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreatePresignedNotebookInstanceUrl",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreatePresignedNotebookInstanceUrl")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateTrainingJobInput {
    #[serde(rename = "TrainingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_name: std::option::Option<std::string::String>,
    /// Algorithm-specific hyperparameters.
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
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
}
impl CreateTrainingJobInput {
    pub fn training_job_name(&self) -> std::option::Option<&str> {
        self.training_job_name.as_deref()
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

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
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
}
/// See [`CreateTrainingJobInput`](crate::input::CreateTrainingJobInput)
pub mod create_training_job_input {
    /// A builder for [`CreateTrainingJobInput`](crate::input::CreateTrainingJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_name: std::option::Option<std::string::String>,
        hyper_parameters: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        algorithm_specification: std::option::Option<crate::model::AlgorithmSpecification>,
        role_arn: std::option::Option<std::string::String>,
        input_data_config: std::option::Option<std::vec::Vec<crate::model::Channel>>,
        output_data_config: std::option::Option<crate::model::OutputDataConfig>,
        resource_config: std::option::Option<crate::model::ResourceConfig>,
        vpc_config: std::option::Option<crate::model::VpcConfig>,
        stopping_condition: std::option::Option<crate::model::StoppingCondition>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        enable_network_isolation: std::option::Option<bool>,
        enable_inter_container_traffic_encryption: std::option::Option<bool>,
        enable_managed_spot_training: std::option::Option<bool>,
        checkpoint_config: std::option::Option<crate::model::CheckpointConfig>,
        debug_hook_config: std::option::Option<crate::model::DebugHookConfig>,
        debug_rule_configurations: std::option::Option<std::vec::Vec<crate::model::DebugRuleConfiguration>>,
        tensor_board_output_config: std::option::Option<crate::model::TensorBoardOutputConfig>,
        experiment_config: std::option::Option<crate::model::ExperimentConfig>,
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
        /// Consumes the builder and constructs a [`CreateTrainingJobInput`](crate::input::CreateTrainingJobInput)
        pub fn build(self) -> crate::input::CreateTrainingJobInput {
            crate::input::CreateTrainingJobInput {
                training_job_name: self.training_job_name,
                hyper_parameters: self.hyper_parameters,
                algorithm_specification: self.algorithm_specification,
                role_arn: self.role_arn,
                input_data_config: self.input_data_config,
                output_data_config: self.output_data_config,
                resource_config: self.resource_config,
                vpc_config: self.vpc_config,
                stopping_condition: self.stopping_condition,
                tags: self.tags,
                enable_network_isolation: self.enable_network_isolation,
                enable_inter_container_traffic_encryption: self.enable_inter_container_traffic_encryption,
                enable_managed_spot_training: self.enable_managed_spot_training,
                checkpoint_config: self.checkpoint_config,
                debug_hook_config: self.debug_hook_config,
                debug_rule_configurations: self.debug_rule_configurations,
                tensor_board_output_config: self.tensor_board_output_config,
                experiment_config: self.experiment_config,
            }
        }
    }
}
impl CreateTrainingJobInput {
    /// Creates a new builder-style object to manufacture [`CreateTrainingJobInput`](crate::input::CreateTrainingJobInput)
    pub fn builder() -> crate::input::create_training_job_input::Builder {
        crate::input::create_training_job_input::Builder::default()
    }
}

impl CreateTrainingJobInput {
    /// Serializes this input into an Operation<[`CreateTrainingJob`](crate::operation::CreateTrainingJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateTrainingJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateTrainingJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateTrainingJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateTrainingJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeTrainingJobInput {
    #[serde(rename = "TrainingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_name: std::option::Option<std::string::String>,
}
impl DescribeTrainingJobInput {
    pub fn training_job_name(&self) -> std::option::Option<&str> {
        self.training_job_name.as_deref()
    }
}
/// See [`DescribeTrainingJobInput`](crate::input::DescribeTrainingJobInput)
pub mod describe_training_job_input {
    /// A builder for [`DescribeTrainingJobInput`](crate::input::DescribeTrainingJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeTrainingJobInput`](crate::input::DescribeTrainingJobInput)
        pub fn build(self) -> crate::input::DescribeTrainingJobInput {
            crate::input::DescribeTrainingJobInput {
                training_job_name: self.training_job_name,
            }
        }
    }
}
impl DescribeTrainingJobInput {
    /// Creates a new builder-style object to manufacture [`DescribeTrainingJobInput`](crate::input::DescribeTrainingJobInput)
    pub fn builder() -> crate::input::describe_training_job_input::Builder {
        crate::input::describe_training_job_input::Builder::default()
    }
}

impl DescribeTrainingJobInput {
    /// Serializes this input into an Operation<[`DescribeTrainingJob`](crate::operation::DescribeTrainingJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeTrainingJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeTrainingJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeTrainingJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeTrainingJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTrainingJobsInput {
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::TrainingJobStatus>,
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::SortBy>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::SortOrder>,
}
impl ListTrainingJobsInput {
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn last_modified_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_after.as_ref()
    }

    pub fn last_modified_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_before.as_ref()
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::TrainingJobStatus> {
        self.status_equals.as_ref()
    }

    pub fn sort_by(&self) -> std::option::Option<&crate::model::SortBy> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }
}
/// See [`ListTrainingJobsInput`](crate::input::ListTrainingJobsInput)
pub mod list_training_jobs_input {
    /// A builder for [`ListTrainingJobsInput`](crate::input::ListTrainingJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        creation_time_after: std::option::Option<smithy_types::Instant>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        last_modified_time_after: std::option::Option<smithy_types::Instant>,
        last_modified_time_before: std::option::Option<smithy_types::Instant>,
        name_contains: std::option::Option<std::string::String>,
        status_equals: std::option::Option<crate::model::TrainingJobStatus>,
        sort_by: std::option::Option<crate::model::SortBy>,
        sort_order: std::option::Option<crate::model::SortOrder>,
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_after = Some(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_after = input;
            self
        }
        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_before = Some(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_before = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.status_equals = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::SortBy) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SortBy>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTrainingJobsInput`](crate::input::ListTrainingJobsInput)
        pub fn build(self) -> crate::input::ListTrainingJobsInput {
            crate::input::ListTrainingJobsInput {
                next_token: self.next_token,
                max_results: self.max_results,
                creation_time_after: self.creation_time_after,
                creation_time_before: self.creation_time_before,
                last_modified_time_after: self.last_modified_time_after,
                last_modified_time_before: self.last_modified_time_before,
                name_contains: self.name_contains,
                status_equals: self.status_equals,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
            }
        }
    }
}
impl ListTrainingJobsInput {
    /// Creates a new builder-style object to manufacture [`ListTrainingJobsInput`](crate::input::ListTrainingJobsInput)
    pub fn builder() -> crate::input::list_training_jobs_input::Builder {
        crate::input::list_training_jobs_input::Builder::default()
    }
}

impl ListTrainingJobsInput {
    /// Serializes this input into an Operation<[`ListTrainingJobs`](crate::operation::ListTrainingJobs)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTrainingJobs>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTrainingJobs::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListTrainingJobs",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListTrainingJobs")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopTrainingJobInput {
    #[serde(rename = "TrainingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub training_job_name: std::option::Option<std::string::String>,
}
impl StopTrainingJobInput {
    pub fn training_job_name(&self) -> std::option::Option<&str> {
        self.training_job_name.as_deref()
    }
}
/// See [`StopTrainingJobInput`](crate::input::StopTrainingJobInput)
pub mod stop_training_job_input {
    /// A builder for [`StopTrainingJobInput`](crate::input::StopTrainingJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        training_job_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`StopTrainingJobInput`](crate::input::StopTrainingJobInput)
        pub fn build(self) -> crate::input::StopTrainingJobInput {
            crate::input::StopTrainingJobInput {
                training_job_name: self.training_job_name,
            }
        }
    }
}
impl StopTrainingJobInput {
    /// Creates a new builder-style object to manufacture [`StopTrainingJobInput`](crate::input::StopTrainingJobInput)
    pub fn builder() -> crate::input::stop_training_job_input::Builder {
        crate::input::stop_training_job_input::Builder::default()
    }
}

impl StopTrainingJobInput {
    /// Serializes this input into an Operation<[`StopTrainingJob`](crate::operation::StopTrainingJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StopTrainingJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::StopTrainingJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "StopTrainingJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.StopTrainingJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateModelInput {
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
    #[serde(rename = "PrimaryContainer")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub primary_container: std::option::Option<crate::model::ContainerDefinition>,
    /// Containers in an inference pipeline.
    #[serde(rename = "Containers")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub containers: std::option::Option<std::vec::Vec<crate::model::ContainerDefinition>>,
    #[serde(rename = "ExecutionRoleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub execution_role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    #[serde(rename = "VpcConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    #[serde(rename = "EnableNetworkIsolation")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enable_network_isolation: std::option::Option<bool>,
}
impl CreateModelInput {
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

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn vpc_config(&self) -> std::option::Option<&crate::model::VpcConfig> {
        self.vpc_config.as_ref()
    }

    pub fn enable_network_isolation(&self) -> std::option::Option<bool> {
        self.enable_network_isolation
    }
}
/// See [`CreateModelInput`](crate::input::CreateModelInput)
pub mod create_model_input {
    /// A builder for [`CreateModelInput`](crate::input::CreateModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        model_name: std::option::Option<std::string::String>,
        primary_container: std::option::Option<crate::model::ContainerDefinition>,
        containers: std::option::Option<std::vec::Vec<crate::model::ContainerDefinition>>,
        execution_role_arn: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        vpc_config: std::option::Option<crate::model::VpcConfig>,
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
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.vpc_config = Some(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.vpc_config = input;
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
        /// Consumes the builder and constructs a [`CreateModelInput`](crate::input::CreateModelInput)
        pub fn build(self) -> crate::input::CreateModelInput {
            crate::input::CreateModelInput {
                model_name: self.model_name,
                primary_container: self.primary_container,
                containers: self.containers,
                execution_role_arn: self.execution_role_arn,
                tags: self.tags,
                vpc_config: self.vpc_config,
                enable_network_isolation: self.enable_network_isolation,
            }
        }
    }
}
impl CreateModelInput {
    /// Creates a new builder-style object to manufacture [`CreateModelInput`](crate::input::CreateModelInput)
    pub fn builder() -> crate::input::create_model_input::Builder {
        crate::input::create_model_input::Builder::default()
    }
}

impl CreateModelInput {
    /// Serializes this input into an Operation<[`CreateModel`](crate::operation::CreateModel)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateModel>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateModel::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateModel",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateModel")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeModelInput {
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
}
impl DescribeModelInput {
    pub fn model_name(&self) -> std::option::Option<&str> {
        self.model_name.as_deref()
    }
}
/// See [`DescribeModelInput`](crate::input::DescribeModelInput)
pub mod describe_model_input {
    /// A builder for [`DescribeModelInput`](crate::input::DescribeModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        model_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeModelInput`](crate::input::DescribeModelInput)
        pub fn build(self) -> crate::input::DescribeModelInput {
            crate::input::DescribeModelInput {
                model_name: self.model_name,
            }
        }
    }
}
impl DescribeModelInput {
    /// Creates a new builder-style object to manufacture [`DescribeModelInput`](crate::input::DescribeModelInput)
    pub fn builder() -> crate::input::describe_model_input::Builder {
        crate::input::describe_model_input::Builder::default()
    }
}

impl DescribeModelInput {
    /// Serializes this input into an Operation<[`DescribeModel`](crate::operation::DescribeModel)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeModel>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeModel::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeModel",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeModel")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteModelInput {
    #[serde(rename = "ModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub model_name: std::option::Option<std::string::String>,
}
impl DeleteModelInput {
    pub fn model_name(&self) -> std::option::Option<&str> {
        self.model_name.as_deref()
    }
}
/// See [`DeleteModelInput`](crate::input::DeleteModelInput)
pub mod delete_model_input {
    /// A builder for [`DeleteModelInput`](crate::input::DeleteModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        model_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteModelInput`](crate::input::DeleteModelInput)
        pub fn build(self) -> crate::input::DeleteModelInput {
            crate::input::DeleteModelInput {
                model_name: self.model_name,
            }
        }
    }
}
impl DeleteModelInput {
    /// Creates a new builder-style object to manufacture [`DeleteModelInput`](crate::input::DeleteModelInput)
    pub fn builder() -> crate::input::delete_model_input::Builder {
        crate::input::delete_model_input::Builder::default()
    }
}

impl DeleteModelInput {
    /// Serializes this input into an Operation<[`DeleteModel`](crate::operation::DeleteModel)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteModel>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteModel::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DeleteModel",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DeleteModel")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListModelsInput {
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::ModelSortKey>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::OrderKey>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
}
impl ListModelsInput {
    pub fn sort_by(&self) -> std::option::Option<&crate::model::ModelSortKey> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::OrderKey> {
        self.sort_order.as_ref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }
}
/// See [`ListModelsInput`](crate::input::ListModelsInput)
pub mod list_models_input {
    /// A builder for [`ListModelsInput`](crate::input::ListModelsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        sort_by: std::option::Option<crate::model::ModelSortKey>,
        sort_order: std::option::Option<crate::model::OrderKey>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        name_contains: std::option::Option<std::string::String>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        creation_time_after: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn sort_by(mut self, input: crate::model::ModelSortKey) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::ModelSortKey>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::OrderKey) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::OrderKey>) -> Self {
            self.sort_order = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        /// Consumes the builder and constructs a [`ListModelsInput`](crate::input::ListModelsInput)
        pub fn build(self) -> crate::input::ListModelsInput {
            crate::input::ListModelsInput {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                next_token: self.next_token,
                max_results: self.max_results,
                name_contains: self.name_contains,
                creation_time_before: self.creation_time_before,
                creation_time_after: self.creation_time_after,
            }
        }
    }
}
impl ListModelsInput {
    /// Creates a new builder-style object to manufacture [`ListModelsInput`](crate::input::ListModelsInput)
    pub fn builder() -> crate::input::list_models_input::Builder {
        crate::input::list_models_input::Builder::default()
    }
}

impl ListModelsInput {
    /// Serializes this input into an Operation<[`ListModels`](crate::operation::ListModels)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListModels>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListModels::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListModels",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListModels")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateTransformJobInput {
    #[serde(rename = "TransformJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_name: std::option::Option<std::string::String>,
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
    #[serde(rename = "DataProcessing")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_processing: std::option::Option<crate::model::DataProcessing>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    #[serde(rename = "ExperimentConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub experiment_config: std::option::Option<crate::model::ExperimentConfig>,
}
impl CreateTransformJobInput {
    pub fn transform_job_name(&self) -> std::option::Option<&str> {
        self.transform_job_name.as_deref()
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

    pub fn data_processing(&self) -> std::option::Option<&crate::model::DataProcessing> {
        self.data_processing.as_ref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn experiment_config(&self) -> std::option::Option<&crate::model::ExperimentConfig> {
        self.experiment_config.as_ref()
    }
}
/// See [`CreateTransformJobInput`](crate::input::CreateTransformJobInput)
pub mod create_transform_job_input {
    /// A builder for [`CreateTransformJobInput`](crate::input::CreateTransformJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_name: std::option::Option<std::string::String>,
        model_name: std::option::Option<std::string::String>,
        max_concurrent_transforms: std::option::Option<i32>,
        max_payload_in_mb: std::option::Option<i32>,
        batch_strategy: std::option::Option<crate::model::BatchStrategy>,
        environment: std::option::Option<std::collections::BTreeMap<std::string::String, std::string::String>>,
        transform_input: std::option::Option<crate::model::TransformInput>,
        transform_output: std::option::Option<crate::model::TransformOutput>,
        transform_resources: std::option::Option<crate::model::TransformResources>,
        data_processing: std::option::Option<crate::model::DataProcessing>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn data_processing(mut self, input: crate::model::DataProcessing) -> Self {
            self.data_processing = Some(input);
            self
        }
        pub fn set_data_processing(mut self, input: std::option::Option<crate::model::DataProcessing>) -> Self {
            self.data_processing = input;
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
        pub fn experiment_config(mut self, input: crate::model::ExperimentConfig) -> Self {
            self.experiment_config = Some(input);
            self
        }
        pub fn set_experiment_config(mut self, input: std::option::Option<crate::model::ExperimentConfig>) -> Self {
            self.experiment_config = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateTransformJobInput`](crate::input::CreateTransformJobInput)
        pub fn build(self) -> crate::input::CreateTransformJobInput {
            crate::input::CreateTransformJobInput {
                transform_job_name: self.transform_job_name,
                model_name: self.model_name,
                max_concurrent_transforms: self.max_concurrent_transforms,
                max_payload_in_mb: self.max_payload_in_mb,
                batch_strategy: self.batch_strategy,
                environment: self.environment,
                transform_input: self.transform_input,
                transform_output: self.transform_output,
                transform_resources: self.transform_resources,
                data_processing: self.data_processing,
                tags: self.tags,
                experiment_config: self.experiment_config,
            }
        }
    }
}
impl CreateTransformJobInput {
    /// Creates a new builder-style object to manufacture [`CreateTransformJobInput`](crate::input::CreateTransformJobInput)
    pub fn builder() -> crate::input::create_transform_job_input::Builder {
        crate::input::create_transform_job_input::Builder::default()
    }
}

impl CreateTransformJobInput {
    /// Serializes this input into an Operation<[`CreateTransformJob`](crate::operation::CreateTransformJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateTransformJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateTransformJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateTransformJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateTransformJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeTransformJobInput {
    #[serde(rename = "TransformJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_name: std::option::Option<std::string::String>,
}
impl DescribeTransformJobInput {
    pub fn transform_job_name(&self) -> std::option::Option<&str> {
        self.transform_job_name.as_deref()
    }
}
/// See [`DescribeTransformJobInput`](crate::input::DescribeTransformJobInput)
pub mod describe_transform_job_input {
    /// A builder for [`DescribeTransformJobInput`](crate::input::DescribeTransformJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeTransformJobInput`](crate::input::DescribeTransformJobInput)
        pub fn build(self) -> crate::input::DescribeTransformJobInput {
            crate::input::DescribeTransformJobInput {
                transform_job_name: self.transform_job_name,
            }
        }
    }
}
impl DescribeTransformJobInput {
    /// Creates a new builder-style object to manufacture [`DescribeTransformJobInput`](crate::input::DescribeTransformJobInput)
    pub fn builder() -> crate::input::describe_transform_job_input::Builder {
        crate::input::describe_transform_job_input::Builder::default()
    }
}

impl DescribeTransformJobInput {
    /// Serializes this input into an Operation<[`DescribeTransformJob`](crate::operation::DescribeTransformJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeTransformJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeTransformJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeTransformJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeTransformJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTransformJobsInput {
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::TransformJobStatus>,
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::SortBy>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::SortOrder>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}
impl ListTransformJobsInput {
    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn last_modified_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_after.as_ref()
    }

    pub fn last_modified_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_before.as_ref()
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::TransformJobStatus> {
        self.status_equals.as_ref()
    }

    pub fn sort_by(&self) -> std::option::Option<&crate::model::SortBy> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
/// See [`ListTransformJobsInput`](crate::input::ListTransformJobsInput)
pub mod list_transform_jobs_input {
    /// A builder for [`ListTransformJobsInput`](crate::input::ListTransformJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        creation_time_after: std::option::Option<smithy_types::Instant>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        last_modified_time_after: std::option::Option<smithy_types::Instant>,
        last_modified_time_before: std::option::Option<smithy_types::Instant>,
        name_contains: std::option::Option<std::string::String>,
        status_equals: std::option::Option<crate::model::TransformJobStatus>,
        sort_by: std::option::Option<crate::model::SortBy>,
        sort_order: std::option::Option<crate::model::SortOrder>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_after = Some(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_after = input;
            self
        }
        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_before = Some(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_before = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::TransformJobStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::TransformJobStatus>) -> Self {
            self.status_equals = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::SortBy) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SortBy>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTransformJobsInput`](crate::input::ListTransformJobsInput)
        pub fn build(self) -> crate::input::ListTransformJobsInput {
            crate::input::ListTransformJobsInput {
                creation_time_after: self.creation_time_after,
                creation_time_before: self.creation_time_before,
                last_modified_time_after: self.last_modified_time_after,
                last_modified_time_before: self.last_modified_time_before,
                name_contains: self.name_contains,
                status_equals: self.status_equals,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListTransformJobsInput {
    /// Creates a new builder-style object to manufacture [`ListTransformJobsInput`](crate::input::ListTransformJobsInput)
    pub fn builder() -> crate::input::list_transform_jobs_input::Builder {
        crate::input::list_transform_jobs_input::Builder::default()
    }
}

impl ListTransformJobsInput {
    /// Serializes this input into an Operation<[`ListTransformJobs`](crate::operation::ListTransformJobs)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTransformJobs>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTransformJobs::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListTransformJobs",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListTransformJobs")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopTransformJobInput {
    #[serde(rename = "TransformJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform_job_name: std::option::Option<std::string::String>,
}
impl StopTransformJobInput {
    pub fn transform_job_name(&self) -> std::option::Option<&str> {
        self.transform_job_name.as_deref()
    }
}
/// See [`StopTransformJobInput`](crate::input::StopTransformJobInput)
pub mod stop_transform_job_input {
    /// A builder for [`StopTransformJobInput`](crate::input::StopTransformJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transform_job_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`StopTransformJobInput`](crate::input::StopTransformJobInput)
        pub fn build(self) -> crate::input::StopTransformJobInput {
            crate::input::StopTransformJobInput {
                transform_job_name: self.transform_job_name,
            }
        }
    }
}
impl StopTransformJobInput {
    /// Creates a new builder-style object to manufacture [`StopTransformJobInput`](crate::input::StopTransformJobInput)
    pub fn builder() -> crate::input::stop_transform_job_input::Builder {
        crate::input::stop_transform_job_input::Builder::default()
    }
}

impl StopTransformJobInput {
    /// Serializes this input into an Operation<[`StopTransformJob`](crate::operation::StopTransformJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StopTransformJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::StopTransformJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "StopTransformJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.StopTransformJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateHyperParameterTuningJobInput {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
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
    #[serde(rename = "WarmStartConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub warm_start_config: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateHyperParameterTuningJobInput {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
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

    pub fn warm_start_config(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobWarmStartConfig> {
        self.warm_start_config.as_ref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateHyperParameterTuningJobInput`](crate::input::CreateHyperParameterTuningJobInput)
pub mod create_hyper_parameter_tuning_job_input {
    /// A builder for [`CreateHyperParameterTuningJobInput`](crate::input::CreateHyperParameterTuningJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
        hyper_parameter_tuning_job_config: std::option::Option<crate::model::HyperParameterTuningJobConfig>,
        training_job_definition: std::option::Option<crate::model::HyperParameterTrainingJobDefinition>,
        training_job_definitions: std::option::Option<std::vec::Vec<crate::model::HyperParameterTrainingJobDefinition>>,
        warm_start_config: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn warm_start_config(mut self, input: crate::model::HyperParameterTuningJobWarmStartConfig) -> Self {
            self.warm_start_config = Some(input);
            self
        }
        pub fn set_warm_start_config(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobWarmStartConfig>) -> Self {
            self.warm_start_config = input;
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
        /// Consumes the builder and constructs a [`CreateHyperParameterTuningJobInput`](crate::input::CreateHyperParameterTuningJobInput)
        pub fn build(self) -> crate::input::CreateHyperParameterTuningJobInput {
            crate::input::CreateHyperParameterTuningJobInput {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
                hyper_parameter_tuning_job_config: self.hyper_parameter_tuning_job_config,
                training_job_definition: self.training_job_definition,
                training_job_definitions: self.training_job_definitions,
                warm_start_config: self.warm_start_config,
                tags: self.tags,
            }
        }
    }
}
impl CreateHyperParameterTuningJobInput {
    /// Creates a new builder-style object to manufacture [`CreateHyperParameterTuningJobInput`](crate::input::CreateHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::create_hyper_parameter_tuning_job_input::Builder {
        crate::input::create_hyper_parameter_tuning_job_input::Builder::default()
    }
}

impl CreateHyperParameterTuningJobInput {
    /// Serializes this input into an Operation<[`CreateHyperParameterTuningJob`](crate::operation::CreateHyperParameterTuningJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateHyperParameterTuningJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateHyperParameterTuningJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateHyperParameterTuningJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateHyperParameterTuningJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeHyperParameterTuningJobInput {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
}
impl DescribeHyperParameterTuningJobInput {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }
}
/// See [`DescribeHyperParameterTuningJobInput`](crate::input::DescribeHyperParameterTuningJobInput)
pub mod describe_hyper_parameter_tuning_job_input {
    /// A builder for [`DescribeHyperParameterTuningJobInput`](crate::input::DescribeHyperParameterTuningJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeHyperParameterTuningJobInput`](crate::input::DescribeHyperParameterTuningJobInput)
        pub fn build(self) -> crate::input::DescribeHyperParameterTuningJobInput {
            crate::input::DescribeHyperParameterTuningJobInput {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
            }
        }
    }
}
impl DescribeHyperParameterTuningJobInput {
    /// Creates a new builder-style object to manufacture [`DescribeHyperParameterTuningJobInput`](crate::input::DescribeHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::describe_hyper_parameter_tuning_job_input::Builder {
        crate::input::describe_hyper_parameter_tuning_job_input::Builder::default()
    }
}

impl DescribeHyperParameterTuningJobInput {
    /// Serializes this input into an Operation<[`DescribeHyperParameterTuningJob`](crate::operation::DescribeHyperParameterTuningJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeHyperParameterTuningJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeHyperParameterTuningJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeHyperParameterTuningJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeHyperParameterTuningJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListHyperParameterTuningJobsInput {
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::HyperParameterTuningJobSortByOptions>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::SortOrder>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::HyperParameterTuningJobStatus>,
}
impl ListHyperParameterTuningJobsInput {
    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn sort_by(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobSortByOptions> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn last_modified_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_after.as_ref()
    }

    pub fn last_modified_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_before.as_ref()
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::HyperParameterTuningJobStatus> {
        self.status_equals.as_ref()
    }
}
/// See [`ListHyperParameterTuningJobsInput`](crate::input::ListHyperParameterTuningJobsInput)
pub mod list_hyper_parameter_tuning_jobs_input {
    /// A builder for [`ListHyperParameterTuningJobsInput`](crate::input::ListHyperParameterTuningJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        sort_by: std::option::Option<crate::model::HyperParameterTuningJobSortByOptions>,
        sort_order: std::option::Option<crate::model::SortOrder>,
        name_contains: std::option::Option<std::string::String>,
        creation_time_after: std::option::Option<smithy_types::Instant>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        last_modified_time_after: std::option::Option<smithy_types::Instant>,
        last_modified_time_before: std::option::Option<smithy_types::Instant>,
        status_equals: std::option::Option<crate::model::HyperParameterTuningJobStatus>,
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::HyperParameterTuningJobSortByOptions) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobSortByOptions>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_after = Some(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_after = input;
            self
        }
        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_before = Some(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_before = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::HyperParameterTuningJobStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::HyperParameterTuningJobStatus>) -> Self {
            self.status_equals = input;
            self
        }
        /// Consumes the builder and constructs a [`ListHyperParameterTuningJobsInput`](crate::input::ListHyperParameterTuningJobsInput)
        pub fn build(self) -> crate::input::ListHyperParameterTuningJobsInput {
            crate::input::ListHyperParameterTuningJobsInput {
                next_token: self.next_token,
                max_results: self.max_results,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                name_contains: self.name_contains,
                creation_time_after: self.creation_time_after,
                creation_time_before: self.creation_time_before,
                last_modified_time_after: self.last_modified_time_after,
                last_modified_time_before: self.last_modified_time_before,
                status_equals: self.status_equals,
            }
        }
    }
}
impl ListHyperParameterTuningJobsInput {
    /// Creates a new builder-style object to manufacture [`ListHyperParameterTuningJobsInput`](crate::input::ListHyperParameterTuningJobsInput)
    pub fn builder() -> crate::input::list_hyper_parameter_tuning_jobs_input::Builder {
        crate::input::list_hyper_parameter_tuning_jobs_input::Builder::default()
    }
}

impl ListHyperParameterTuningJobsInput {
    /// Serializes this input into an Operation<[`ListHyperParameterTuningJobs`](crate::operation::ListHyperParameterTuningJobs)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListHyperParameterTuningJobs>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListHyperParameterTuningJobs::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListHyperParameterTuningJobs",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListHyperParameterTuningJobs")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopHyperParameterTuningJobInput {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
}
impl StopHyperParameterTuningJobInput {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }
}
/// See [`StopHyperParameterTuningJobInput`](crate::input::StopHyperParameterTuningJobInput)
pub mod stop_hyper_parameter_tuning_job_input {
    /// A builder for [`StopHyperParameterTuningJobInput`](crate::input::StopHyperParameterTuningJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`StopHyperParameterTuningJobInput`](crate::input::StopHyperParameterTuningJobInput)
        pub fn build(self) -> crate::input::StopHyperParameterTuningJobInput {
            crate::input::StopHyperParameterTuningJobInput {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
            }
        }
    }
}
impl StopHyperParameterTuningJobInput {
    /// Creates a new builder-style object to manufacture [`StopHyperParameterTuningJobInput`](crate::input::StopHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::stop_hyper_parameter_tuning_job_input::Builder {
        crate::input::stop_hyper_parameter_tuning_job_input::Builder::default()
    }
}

impl StopHyperParameterTuningJobInput {
    /// Serializes this input into an Operation<[`StopHyperParameterTuningJob`](crate::operation::StopHyperParameterTuningJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StopHyperParameterTuningJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::StopHyperParameterTuningJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "StopHyperParameterTuningJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.StopHyperParameterTuningJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListTrainingJobsForHyperParameterTuningJobInput {
    #[serde(rename = "HyperParameterTuningJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::TrainingJobStatus>,
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::TrainingJobSortByOptions>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::SortOrder>,
}
impl ListTrainingJobsForHyperParameterTuningJobInput {
    pub fn hyper_parameter_tuning_job_name(&self) -> std::option::Option<&str> {
        self.hyper_parameter_tuning_job_name.as_deref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::TrainingJobStatus> {
        self.status_equals.as_ref()
    }

    pub fn sort_by(&self) -> std::option::Option<&crate::model::TrainingJobSortByOptions> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }
}
/// See [`ListTrainingJobsForHyperParameterTuningJobInput`](crate::input::ListTrainingJobsForHyperParameterTuningJobInput)
pub mod list_training_jobs_for_hyper_parameter_tuning_job_input {
    /// A builder for [`ListTrainingJobsForHyperParameterTuningJobInput`](crate::input::ListTrainingJobsForHyperParameterTuningJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        hyper_parameter_tuning_job_name: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        status_equals: std::option::Option<crate::model::TrainingJobStatus>,
        sort_by: std::option::Option<crate::model::TrainingJobSortByOptions>,
        sort_order: std::option::Option<crate::model::SortOrder>,
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
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::TrainingJobStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::TrainingJobStatus>) -> Self {
            self.status_equals = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::TrainingJobSortByOptions) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::TrainingJobSortByOptions>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        /// Consumes the builder and constructs a [`ListTrainingJobsForHyperParameterTuningJobInput`](crate::input::ListTrainingJobsForHyperParameterTuningJobInput)
        pub fn build(self) -> crate::input::ListTrainingJobsForHyperParameterTuningJobInput {
            crate::input::ListTrainingJobsForHyperParameterTuningJobInput {
                hyper_parameter_tuning_job_name: self.hyper_parameter_tuning_job_name,
                next_token: self.next_token,
                max_results: self.max_results,
                status_equals: self.status_equals,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
            }
        }
    }
}
impl ListTrainingJobsForHyperParameterTuningJobInput {
    /// Creates a new builder-style object to manufacture [`ListTrainingJobsForHyperParameterTuningJobInput`](crate::input::ListTrainingJobsForHyperParameterTuningJobInput)
    pub fn builder() -> crate::input::list_training_jobs_for_hyper_parameter_tuning_job_input::Builder {
        crate::input::list_training_jobs_for_hyper_parameter_tuning_job_input::Builder::default()
    }
}

impl ListTrainingJobsForHyperParameterTuningJobInput {
    /// Serializes this input into an Operation<[`ListTrainingJobsForHyperParameterTuningJob`](crate::operation::ListTrainingJobsForHyperParameterTuningJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTrainingJobsForHyperParameterTuningJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTrainingJobsForHyperParameterTuningJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListTrainingJobsForHyperParameterTuningJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListTrainingJobsForHyperParameterTuningJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateLabelingJobInput {
    #[serde(rename = "LabelingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_name: std::option::Option<std::string::String>,
    /// Attribute name the labels are written under in the output manifest.
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
}
impl CreateLabelingJobInput {
    pub fn labeling_job_name(&self) -> std::option::Option<&str> {
        self.labeling_job_name.as_deref()
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
}
/// See [`CreateLabelingJobInput`](crate::input::CreateLabelingJobInput)
pub mod create_labeling_job_input {
    /// A builder for [`CreateLabelingJobInput`](crate::input::CreateLabelingJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_name: std::option::Option<std::string::String>,
        label_attribute_name: std::option::Option<std::string::String>,
        input_config: std::option::Option<crate::model::LabelingJobInputConfig>,
        output_config: std::option::Option<crate::model::LabelingJobOutputConfig>,
        role_arn: std::option::Option<std::string::String>,
        label_category_config_s3_uri: std::option::Option<std::string::String>,
        stopping_conditions: std::option::Option<crate::model::LabelingJobStoppingConditions>,
        labeling_job_algorithms_config: std::option::Option<crate::model::LabelingJobAlgorithmsConfig>,
        human_task_config: std::option::Option<crate::model::HumanTaskConfig>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_name = Some(input.into());
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_name = input;
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
        /// Consumes the builder and constructs a [`CreateLabelingJobInput`](crate::input::CreateLabelingJobInput)
        pub fn build(self) -> crate::input::CreateLabelingJobInput {
            crate::input::CreateLabelingJobInput {
                labeling_job_name: self.labeling_job_name,
                label_attribute_name: self.label_attribute_name,
                input_config: self.input_config,
                output_config: self.output_config,
                role_arn: self.role_arn,
                label_category_config_s3_uri: self.label_category_config_s3_uri,
                stopping_conditions: self.stopping_conditions,
                labeling_job_algorithms_config: self.labeling_job_algorithms_config,
                human_task_config: self.human_task_config,
                tags: self.tags,
            }
        }
    }
}
impl CreateLabelingJobInput {
    /// Creates a new builder-style object to manufacture [`CreateLabelingJobInput`](crate::input::CreateLabelingJobInput)
    pub fn builder() -> crate::input::create_labeling_job_input::Builder {
        crate::input::create_labeling_job_input::Builder::default()
    }
}

impl CreateLabelingJobInput {
    /// Serializes this input into an Operation<[`CreateLabelingJob`](crate::operation::CreateLabelingJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateLabelingJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateLabelingJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateLabelingJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateLabelingJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeLabelingJobInput {
    #[serde(rename = "LabelingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_name: std::option::Option<std::string::String>,
}
impl DescribeLabelingJobInput {
    pub fn labeling_job_name(&self) -> std::option::Option<&str> {
        self.labeling_job_name.as_deref()
    }
}
/// See [`DescribeLabelingJobInput`](crate::input::DescribeLabelingJobInput)
pub mod describe_labeling_job_input {
    /// A builder for [`DescribeLabelingJobInput`](crate::input::DescribeLabelingJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_name = Some(input.into());
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeLabelingJobInput`](crate::input::DescribeLabelingJobInput)
        pub fn build(self) -> crate::input::DescribeLabelingJobInput {
            crate::input::DescribeLabelingJobInput {
                labeling_job_name: self.labeling_job_name,
            }
        }
    }
}
impl DescribeLabelingJobInput {
    /// Creates a new builder-style object to manufacture [`DescribeLabelingJobInput`](crate::input::DescribeLabelingJobInput)
    pub fn builder() -> crate::input::describe_labeling_job_input::Builder {
        crate::input::describe_labeling_job_input::Builder::default()
    }
}

impl DescribeLabelingJobInput {
    /// Serializes this input into an Operation<[`DescribeLabelingJob`](crate::operation::DescribeLabelingJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeLabelingJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeLabelingJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeLabelingJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeLabelingJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListLabelingJobsInput {
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::SortBy>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::SortOrder>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::LabelingJobStatus>,
}
impl ListLabelingJobsInput {
    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn last_modified_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_after.as_ref()
    }

    pub fn last_modified_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_before.as_ref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn sort_by(&self) -> std::option::Option<&crate::model::SortBy> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::LabelingJobStatus> {
        self.status_equals.as_ref()
    }
}
/// See [`ListLabelingJobsInput`](crate::input::ListLabelingJobsInput)
pub mod list_labeling_jobs_input {
    /// A builder for [`ListLabelingJobsInput`](crate::input::ListLabelingJobsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        creation_time_after: std::option::Option<smithy_types::Instant>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        last_modified_time_after: std::option::Option<smithy_types::Instant>,
        last_modified_time_before: std::option::Option<smithy_types::Instant>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
        name_contains: std::option::Option<std::string::String>,
        sort_by: std::option::Option<crate::model::SortBy>,
        sort_order: std::option::Option<crate::model::SortOrder>,
        status_equals: std::option::Option<crate::model::LabelingJobStatus>,
    }
    impl Builder {
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_after = Some(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_after = input;
            self
        }
        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_before = Some(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_before = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
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
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::SortBy) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SortBy>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::LabelingJobStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::LabelingJobStatus>) -> Self {
            self.status_equals = input;
            self
        }
        /// Consumes the builder and constructs a [`ListLabelingJobsInput`](crate::input::ListLabelingJobsInput)
        pub fn build(self) -> crate::input::ListLabelingJobsInput {
            crate::input::ListLabelingJobsInput {
                creation_time_after: self.creation_time_after,
                creation_time_before: self.creation_time_before,
                last_modified_time_after: self.last_modified_time_after,
                last_modified_time_before: self.last_modified_time_before,
                max_results: self.max_results,
                next_token: self.next_token,
                name_contains: self.name_contains,
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                status_equals: self.status_equals,
            }
        }
    }
}
impl ListLabelingJobsInput {
    /// Creates a new builder-style object to manufacture [`ListLabelingJobsInput`](crate::input::ListLabelingJobsInput)
    pub fn builder() -> crate::input::list_labeling_jobs_input::Builder {
        crate::input::list_labeling_jobs_input::Builder::default()
    }
}

impl ListLabelingJobsInput {
    /// Serializes this input into an Operation<[`ListLabelingJobs`](crate::operation::ListLabelingJobs)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListLabelingJobs>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListLabelingJobs::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListLabelingJobs",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListLabelingJobs")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct StopLabelingJobInput {
    #[serde(rename = "LabelingJobName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub labeling_job_name: std::option::Option<std::string::String>,
}
impl StopLabelingJobInput {
    pub fn labeling_job_name(&self) -> std::option::Option<&str> {
        self.labeling_job_name.as_deref()
    }
}
/// See [`StopLabelingJobInput`](crate::input::StopLabelingJobInput)
pub mod stop_labeling_job_input {
    /// A builder for [`StopLabelingJobInput`](crate::input::StopLabelingJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        labeling_job_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn labeling_job_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.labeling_job_name = Some(input.into());
            self
        }
        pub fn set_labeling_job_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.labeling_job_name = input;
            self
        }
        /// Consumes the builder and constructs a [`StopLabelingJobInput`](crate::input::StopLabelingJobInput)
        pub fn build(self) -> crate::input::StopLabelingJobInput {
            crate::input::StopLabelingJobInput {
                labeling_job_name: self.labeling_job_name,
            }
        }
    }
}
impl StopLabelingJobInput {
    /// Creates a new builder-style object to manufacture [`StopLabelingJobInput`](crate::input::StopLabelingJobInput)
    pub fn builder() -> crate::input::stop_labeling_job_input::Builder {
        crate::input::stop_labeling_job_input::Builder::default()
    }
}

impl StopLabelingJobInput {
    /// Serializes this input into an Operation<[`StopLabelingJob`](crate::operation::StopLabelingJob)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StopLabelingJob>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::StopLabelingJob::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "StopLabelingJob",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.StopLabelingJob")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateFlowDefinitionInput {
    #[serde(rename = "FlowDefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_name: std::option::Option<std::string::String>,
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
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateFlowDefinitionInput {
    pub fn flow_definition_name(&self) -> std::option::Option<&str> {
        self.flow_definition_name.as_deref()
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

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateFlowDefinitionInput`](crate::input::CreateFlowDefinitionInput)
pub mod create_flow_definition_input {
    /// A builder for [`CreateFlowDefinitionInput`](crate::input::CreateFlowDefinitionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_name: std::option::Option<std::string::String>,
        human_loop_request_source: std::option::Option<crate::model::HumanLoopRequestSource>,
        human_loop_activation_config: std::option::Option<crate::model::HumanLoopActivationConfig>,
        human_loop_config: std::option::Option<crate::model::HumanLoopConfig>,
        output_config: std::option::Option<crate::model::FlowDefinitionOutputConfig>,
        role_arn: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_name = Some(input.into());
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_name = input;
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
        /// Consumes the builder and constructs a [`CreateFlowDefinitionInput`](crate::input::CreateFlowDefinitionInput)
        pub fn build(self) -> crate::input::CreateFlowDefinitionInput {
            crate::input::CreateFlowDefinitionInput {
                flow_definition_name: self.flow_definition_name,
                human_loop_request_source: self.human_loop_request_source,
                human_loop_activation_config: self.human_loop_activation_config,
                human_loop_config: self.human_loop_config,
                output_config: self.output_config,
                role_arn: self.role_arn,
                tags: self.tags,
            }
        }
    }
}
impl CreateFlowDefinitionInput {
    /// Creates a new builder-style object to manufacture [`CreateFlowDefinitionInput`](crate::input::CreateFlowDefinitionInput)
    pub fn builder() -> crate::input::create_flow_definition_input::Builder {
        crate::input::create_flow_definition_input::Builder::default()
    }
}

impl CreateFlowDefinitionInput {
    /// Serializes this input into an Operation<[`CreateFlowDefinition`](crate::operation::CreateFlowDefinition)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateFlowDefinition>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateFlowDefinition::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateFlowDefinition",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateFlowDefinition")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeFlowDefinitionInput {
    #[serde(rename = "FlowDefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_name: std::option::Option<std::string::String>,
}
impl DescribeFlowDefinitionInput {
    pub fn flow_definition_name(&self) -> std::option::Option<&str> {
        self.flow_definition_name.as_deref()
    }
}
/// See [`DescribeFlowDefinitionInput`](crate::input::DescribeFlowDefinitionInput)
pub mod describe_flow_definition_input {
    /// A builder for [`DescribeFlowDefinitionInput`](crate::input::DescribeFlowDefinitionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_name = Some(input.into());
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeFlowDefinitionInput`](crate::input::DescribeFlowDefinitionInput)
        pub fn build(self) -> crate::input::DescribeFlowDefinitionInput {
            crate::input::DescribeFlowDefinitionInput {
                flow_definition_name: self.flow_definition_name,
            }
        }
    }
}
impl DescribeFlowDefinitionInput {
    /// Creates a new builder-style object to manufacture [`DescribeFlowDefinitionInput`](crate::input::DescribeFlowDefinitionInput)
    pub fn builder() -> crate::input::describe_flow_definition_input::Builder {
        crate::input::describe_flow_definition_input::Builder::default()
    }
}

impl DescribeFlowDefinitionInput {
    /// Serializes this input into an Operation<[`DescribeFlowDefinition`](crate::operation::DescribeFlowDefinition)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeFlowDefinition>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeFlowDefinition::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeFlowDefinition",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeFlowDefinition")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListFlowDefinitionsInput {
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::SortOrder>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}
impl ListFlowDefinitionsInput {
    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::SortOrder> {
        self.sort_order.as_ref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }
}
/// See [`ListFlowDefinitionsInput`](crate::input::ListFlowDefinitionsInput)
pub mod list_flow_definitions_input {
    /// A builder for [`ListFlowDefinitionsInput`](crate::input::ListFlowDefinitionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        creation_time_after: std::option::Option<smithy_types::Instant>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        sort_order: std::option::Option<crate::model::SortOrder>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrder) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrder>) -> Self {
            self.sort_order = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListFlowDefinitionsInput`](crate::input::ListFlowDefinitionsInput)
        pub fn build(self) -> crate::input::ListFlowDefinitionsInput {
            crate::input::ListFlowDefinitionsInput {
                creation_time_after: self.creation_time_after,
                creation_time_before: self.creation_time_before,
                sort_order: self.sort_order,
                next_token: self.next_token,
                max_results: self.max_results,
            }
        }
    }
}
impl ListFlowDefinitionsInput {
    /// Creates a new builder-style object to manufacture [`ListFlowDefinitionsInput`](crate::input::ListFlowDefinitionsInput)
    pub fn builder() -> crate::input::list_flow_definitions_input::Builder {
        crate::input::list_flow_definitions_input::Builder::default()
    }
}

impl ListFlowDefinitionsInput {
    /// Serializes this input into an Operation<[`ListFlowDefinitions`](crate::operation::ListFlowDefinitions)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListFlowDefinitions>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListFlowDefinitions::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListFlowDefinitions",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListFlowDefinitions")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteFlowDefinitionInput {
    #[serde(rename = "FlowDefinitionName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub flow_definition_name: std::option::Option<std::string::String>,
}
impl DeleteFlowDefinitionInput {
    pub fn flow_definition_name(&self) -> std::option::Option<&str> {
        self.flow_definition_name.as_deref()
    }
}
/// See [`DeleteFlowDefinitionInput`](crate::input::DeleteFlowDefinitionInput)
pub mod delete_flow_definition_input {
    /// A builder for [`DeleteFlowDefinitionInput`](crate::input::DeleteFlowDefinitionInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        flow_definition_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn flow_definition_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.flow_definition_name = Some(input.into());
            self
        }
        pub fn set_flow_definition_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.flow_definition_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteFlowDefinitionInput`](crate::input::DeleteFlowDefinitionInput)
        pub fn build(self) -> crate::input::DeleteFlowDefinitionInput {
            crate::input::DeleteFlowDefinitionInput {
                flow_definition_name: self.flow_definition_name,
            }
        }
    }
}
impl DeleteFlowDefinitionInput {
    /// Creates a new builder-style object to manufacture [`DeleteFlowDefinitionInput`](crate::input::DeleteFlowDefinitionInput)
    pub fn builder() -> crate::input::delete_flow_definition_input::Builder {
        crate::input::delete_flow_definition_input::Builder::default()
    }
}

impl DeleteFlowDefinitionInput {
    /// Serializes this input into an Operation<[`DeleteFlowDefinition`](crate::operation::DeleteFlowDefinition)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteFlowDefinition>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteFlowDefinition::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DeleteFlowDefinition",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DeleteFlowDefinition")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateEndpointConfigInput {
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "ProductionVariants")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub production_variants: std::option::Option<std::vec::Vec<crate::model::ProductionVariant>>,
    #[serde(rename = "DataCaptureConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_capture_config: std::option::Option<crate::model::DataCaptureConfig>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// KMS key used to encrypt the storage volumes of the hosting instances.
    #[serde(rename = "KmsKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_key_id: std::option::Option<std::string::String>,
}
impl CreateEndpointConfigInput {
    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }

    pub fn production_variants(&self) -> std::option::Option<&[crate::model::ProductionVariant]> {
        self.production_variants.as_deref()
    }

    pub fn data_capture_config(&self) -> std::option::Option<&crate::model::DataCaptureConfig> {
        self.data_capture_config.as_ref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }

    pub fn kms_key_id(&self) -> std::option::Option<&str> {
        self.kms_key_id.as_deref()
    }
}
/// See [`CreateEndpointConfigInput`](crate::input::CreateEndpointConfigInput)
pub mod create_endpoint_config_input {
    /// A builder for [`CreateEndpointConfigInput`](crate::input::CreateEndpointConfigInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_config_name: std::option::Option<std::string::String>,
        production_variants: std::option::Option<std::vec::Vec<crate::model::ProductionVariant>>,
        data_capture_config: std::option::Option<crate::model::DataCaptureConfig>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        kms_key_id: std::option::Option<std::string::String>,
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
        pub fn kms_key_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.kms_key_id = Some(input.into());
            self
        }
        pub fn set_kms_key_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.kms_key_id = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateEndpointConfigInput`](crate::input::CreateEndpointConfigInput)
        pub fn build(self) -> crate::input::CreateEndpointConfigInput {
            crate::input::CreateEndpointConfigInput {
                endpoint_config_name: self.endpoint_config_name,
                production_variants: self.production_variants,
                data_capture_config: self.data_capture_config,
                tags: self.tags,
                kms_key_id: self.kms_key_id,
            }
        }
    }
}
impl CreateEndpointConfigInput {
    /// Creates a new builder-style object to manufacture [`CreateEndpointConfigInput`](crate::input::CreateEndpointConfigInput)
    pub fn builder() -> crate::input::create_endpoint_config_input::Builder {
        crate::input::create_endpoint_config_input::Builder::default()
    }
}

impl CreateEndpointConfigInput {
    /// Serializes this input into an Operation<[`CreateEndpointConfig`](crate::operation::CreateEndpointConfig)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateEndpointConfig>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateEndpointConfig::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateEndpointConfig",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateEndpointConfig")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeEndpointConfigInput {
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
}
impl DescribeEndpointConfigInput {
    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }
}
/// See [`DescribeEndpointConfigInput`](crate::input::DescribeEndpointConfigInput)
pub mod describe_endpoint_config_input {
    /// A builder for [`DescribeEndpointConfigInput`](crate::input::DescribeEndpointConfigInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_config_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeEndpointConfigInput`](crate::input::DescribeEndpointConfigInput)
        pub fn build(self) -> crate::input::DescribeEndpointConfigInput {
            crate::input::DescribeEndpointConfigInput {
                endpoint_config_name: self.endpoint_config_name,
            }
        }
    }
}
impl DescribeEndpointConfigInput {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointConfigInput`](crate::input::DescribeEndpointConfigInput)
    pub fn builder() -> crate::input::describe_endpoint_config_input::Builder {
        crate::input::describe_endpoint_config_input::Builder::default()
    }
}

impl DescribeEndpointConfigInput {
    /// Serializes this input into an Operation<[`DescribeEndpointConfig`](crate::operation::DescribeEndpointConfig)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEndpointConfig>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEndpointConfig::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeEndpointConfig",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeEndpointConfig")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListEndpointConfigsInput {
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::EndpointConfigSortKey>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::OrderKey>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
}
impl ListEndpointConfigsInput {
    pub fn sort_by(&self) -> std::option::Option<&crate::model::EndpointConfigSortKey> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::OrderKey> {
        self.sort_order.as_ref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }
}
/// See [`ListEndpointConfigsInput`](crate::input::ListEndpointConfigsInput)
pub mod list_endpoint_configs_input {
    /// A builder for [`ListEndpointConfigsInput`](crate::input::ListEndpointConfigsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        sort_by: std::option::Option<crate::model::EndpointConfigSortKey>,
        sort_order: std::option::Option<crate::model::OrderKey>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        name_contains: std::option::Option<std::string::String>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        creation_time_after: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn sort_by(mut self, input: crate::model::EndpointConfigSortKey) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::EndpointConfigSortKey>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::OrderKey) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::OrderKey>) -> Self {
            self.sort_order = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        /// Consumes the builder and constructs a [`ListEndpointConfigsInput`](crate::input::ListEndpointConfigsInput)
        pub fn build(self) -> crate::input::ListEndpointConfigsInput {
            crate::input::ListEndpointConfigsInput {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                next_token: self.next_token,
                max_results: self.max_results,
                name_contains: self.name_contains,
                creation_time_before: self.creation_time_before,
                creation_time_after: self.creation_time_after,
            }
        }
    }
}
impl ListEndpointConfigsInput {
    /// Creates a new builder-style object to manufacture [`ListEndpointConfigsInput`](crate::input::ListEndpointConfigsInput)
    pub fn builder() -> crate::input::list_endpoint_configs_input::Builder {
        crate::input::list_endpoint_configs_input::Builder::default()
    }
}

impl ListEndpointConfigsInput {
    /// Serializes this input into an Operation<[`ListEndpointConfigs`](crate::operation::ListEndpointConfigs)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListEndpointConfigs>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListEndpointConfigs::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListEndpointConfigs",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListEndpointConfigs")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteEndpointConfigInput {
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
}
impl DeleteEndpointConfigInput {
    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }
}
/// See [`DeleteEndpointConfigInput`](crate::input::DeleteEndpointConfigInput)
pub mod delete_endpoint_config_input {
    /// A builder for [`DeleteEndpointConfigInput`](crate::input::DeleteEndpointConfigInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_config_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteEndpointConfigInput`](crate::input::DeleteEndpointConfigInput)
        pub fn build(self) -> crate::input::DeleteEndpointConfigInput {
            crate::input::DeleteEndpointConfigInput {
                endpoint_config_name: self.endpoint_config_name,
            }
        }
    }
}
impl DeleteEndpointConfigInput {
    /// Creates a new builder-style object to manufacture [`DeleteEndpointConfigInput`](crate::input::DeleteEndpointConfigInput)
    pub fn builder() -> crate::input::delete_endpoint_config_input::Builder {
        crate::input::delete_endpoint_config_input::Builder::default()
    }
}

impl DeleteEndpointConfigInput {
    /// Serializes this input into an Operation<[`DeleteEndpointConfig`](crate::operation::DeleteEndpointConfig)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteEndpointConfig>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteEndpointConfig::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DeleteEndpointConfig",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DeleteEndpointConfig")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct CreateEndpointInput {
    #[serde(rename = "EndpointName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_name: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "Tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl CreateEndpointInput {
    pub fn endpoint_name(&self) -> std::option::Option<&str> {
        self.endpoint_name.as_deref()
    }

    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }

    pub fn tags(&self) -> std::option::Option<&[crate::model::Tag]> {
        self.tags.as_deref()
    }
}
/// See [`CreateEndpointInput`](crate::input::CreateEndpointInput)
pub mod create_endpoint_input {
    /// A builder for [`CreateEndpointInput`](crate::input::CreateEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_name: std::option::Option<std::string::String>,
        endpoint_config_name: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_name = Some(input.into());
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_name = input;
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
        /// Consumes the builder and constructs a [`CreateEndpointInput`](crate::input::CreateEndpointInput)
        pub fn build(self) -> crate::input::CreateEndpointInput {
            crate::input::CreateEndpointInput {
                endpoint_name: self.endpoint_name,
                endpoint_config_name: self.endpoint_config_name,
                tags: self.tags,
            }
        }
    }
}
impl CreateEndpointInput {
    /// Creates a new builder-style object to manufacture [`CreateEndpointInput`](crate::input::CreateEndpointInput)
    pub fn builder() -> crate::input::create_endpoint_input::Builder {
        crate::input::create_endpoint_input::Builder::default()
    }
}

impl CreateEndpointInput {
    /// Serializes this input into an Operation<[`CreateEndpoint`](crate::operation::CreateEndpoint)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateEndpoint>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateEndpoint::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "CreateEndpoint",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.CreateEndpoint")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DescribeEndpointInput {
    #[serde(rename = "EndpointName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_name: std::option::Option<std::string::String>,
}
impl DescribeEndpointInput {
    pub fn endpoint_name(&self) -> std::option::Option<&str> {
        self.endpoint_name.as_deref()
    }
}
/// See [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
pub mod describe_endpoint_input {
    /// A builder for [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
        pub fn build(self) -> crate::input::DescribeEndpointInput {
            crate::input::DescribeEndpointInput {
                endpoint_name: self.endpoint_name,
            }
        }
    }
}
impl DescribeEndpointInput {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
    pub fn builder() -> crate::input::describe_endpoint_input::Builder {
        crate::input::describe_endpoint_input::Builder::default()
    }
}

impl DescribeEndpointInput {
    /// Serializes this input into an Operation<[`DescribeEndpoint`](crate::operation::DescribeEndpoint)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEndpoint>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEndpoint::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DescribeEndpoint",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DescribeEndpoint")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct ListEndpointsInput {
    #[serde(rename = "SortBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_by: std::option::Option<crate::model::EndpointSortKey>,
    #[serde(rename = "SortOrder")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort_order: std::option::Option<crate::model::OrderKey>,
    #[serde(rename = "NextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "MaxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "NameContains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name_contains: std::option::Option<std::string::String>,
    #[serde(rename = "CreationTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "CreationTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeBefore")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_before: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastModifiedTimeAfter")]
    #[serde(default)]
    #[serde(with = "crate::serde_util::epoch_seconds")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_modified_time_after: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "StatusEquals")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_equals: std::option::Option<crate::model::EndpointStatus>,
}
impl ListEndpointsInput {
    pub fn sort_by(&self) -> std::option::Option<&crate::model::EndpointSortKey> {
        self.sort_by.as_ref()
    }

    pub fn sort_order(&self) -> std::option::Option<&crate::model::OrderKey> {
        self.sort_order.as_ref()
    }

    pub fn next_token(&self) -> std::option::Option<&str> {
        self.next_token.as_deref()
    }

    pub fn max_results(&self) -> std::option::Option<i32> {
        self.max_results
    }

    pub fn name_contains(&self) -> std::option::Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn creation_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_before.as_ref()
    }

    pub fn creation_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.creation_time_after.as_ref()
    }

    pub fn last_modified_time_before(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_before.as_ref()
    }

    pub fn last_modified_time_after(&self) -> std::option::Option<&smithy_types::Instant> {
        self.last_modified_time_after.as_ref()
    }

    pub fn status_equals(&self) -> std::option::Option<&crate::model::EndpointStatus> {
        self.status_equals.as_ref()
    }
}
/// See [`ListEndpointsInput`](crate::input::ListEndpointsInput)
pub mod list_endpoints_input {
    /// A builder for [`ListEndpointsInput`](crate::input::ListEndpointsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        sort_by: std::option::Option<crate::model::EndpointSortKey>,
        sort_order: std::option::Option<crate::model::OrderKey>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        name_contains: std::option::Option<std::string::String>,
        creation_time_before: std::option::Option<smithy_types::Instant>,
        creation_time_after: std::option::Option<smithy_types::Instant>,
        last_modified_time_before: std::option::Option<smithy_types::Instant>,
        last_modified_time_after: std::option::Option<smithy_types::Instant>,
        status_equals: std::option::Option<crate::model::EndpointStatus>,
    }
    impl Builder {
        pub fn sort_by(mut self, input: crate::model::EndpointSortKey) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::EndpointSortKey>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::OrderKey) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::OrderKey>) -> Self {
            self.sort_order = input;
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
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn name_contains(mut self, input: impl Into<std::string::String>) -> Self {
            self.name_contains = Some(input.into());
            self
        }
        pub fn set_name_contains(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name_contains = input;
            self
        }
        pub fn creation_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_before = Some(input);
            self
        }
        pub fn set_creation_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_before = input;
            self
        }
        pub fn creation_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.creation_time_after = Some(input);
            self
        }
        pub fn set_creation_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.creation_time_after = input;
            self
        }
        pub fn last_modified_time_before(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_before = Some(input);
            self
        }
        pub fn set_last_modified_time_before(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_before = input;
            self
        }
        pub fn last_modified_time_after(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_time_after = Some(input);
            self
        }
        pub fn set_last_modified_time_after(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_time_after = input;
            self
        }
        pub fn status_equals(mut self, input: crate::model::EndpointStatus) -> Self {
            self.status_equals = Some(input);
            self
        }
        pub fn set_status_equals(mut self, input: std::option::Option<crate::model::EndpointStatus>) -> Self {
            self.status_equals = input;
            self
        }
        /// Consumes the builder and constructs a [`ListEndpointsInput`](crate::input::ListEndpointsInput)
        pub fn build(self) -> crate::input::ListEndpointsInput {
            crate::input::ListEndpointsInput {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                next_token: self.next_token,
                max_results: self.max_results,
                name_contains: self.name_contains,
                creation_time_before: self.creation_time_before,
                creation_time_after: self.creation_time_after,
                last_modified_time_before: self.last_modified_time_before,
                last_modified_time_after: self.last_modified_time_after,
                status_equals: self.status_equals,
            }
        }
    }
}
impl ListEndpointsInput {
    /// Creates a new builder-style object to manufacture [`ListEndpointsInput`](crate::input::ListEndpointsInput)
    pub fn builder() -> crate::input::list_endpoints_input::Builder {
        crate::input::list_endpoints_input::Builder::default()
    }
}

impl ListEndpointsInput {
    /// Serializes this input into an Operation<[`ListEndpoints`](crate::operation::ListEndpoints)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListEndpoints>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListEndpoints::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "ListEndpoints",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.ListEndpoints")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct UpdateEndpointInput {
    #[serde(rename = "EndpointName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_name: std::option::Option<std::string::String>,
    #[serde(rename = "EndpointConfigName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_config_name: std::option::Option<std::string::String>,
    #[serde(rename = "RetainAllVariantProperties")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub retain_all_variant_properties: std::option::Option<bool>,
    #[serde(rename = "ExcludeRetainedVariantProperties")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exclude_retained_variant_properties: std::option::Option<std::vec::Vec<crate::model::VariantProperty>>,
}
impl UpdateEndpointInput {
    pub fn endpoint_name(&self) -> std::option::Option<&str> {
        self.endpoint_name.as_deref()
    }

    pub fn endpoint_config_name(&self) -> std::option::Option<&str> {
        self.endpoint_config_name.as_deref()
    }

    pub fn retain_all_variant_properties(&self) -> std::option::Option<bool> {
        self.retain_all_variant_properties
    }

    pub fn exclude_retained_variant_properties(&self) -> std::option::Option<&[crate::model::VariantProperty]> {
        self.exclude_retained_variant_properties.as_deref()
    }
}
/// See [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
pub mod update_endpoint_input {
    /// A builder for [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_name: std::option::Option<std::string::String>,
        endpoint_config_name: std::option::Option<std::string::String>,
        retain_all_variant_properties: std::option::Option<bool>,
        exclude_retained_variant_properties: std::option::Option<std::vec::Vec<crate::model::VariantProperty>>,
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
        pub fn endpoint_config_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.endpoint_config_name = Some(input.into());
            self
        }
        pub fn set_endpoint_config_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.endpoint_config_name = input;
            self
        }
        pub fn retain_all_variant_properties(mut self, input: bool) -> Self {
            self.retain_all_variant_properties = Some(input);
            self
        }
        pub fn set_retain_all_variant_properties(mut self, input: std::option::Option<bool>) -> Self {
            self.retain_all_variant_properties = input;
            self
        }
        /// Appends an item to `ExcludeRetainedVariantProperties`.
        ///
        /// To override the contents of this collection use [`set_exclude_retained_variant_properties`](Self::set_exclude_retained_variant_properties).
        pub fn exclude_retained_variant_properties(mut self, input: impl Into<crate::model::VariantProperty>) -> Self {
            let mut v = self.exclude_retained_variant_properties.unwrap_or_default();
            v.push(input.into());
            self.exclude_retained_variant_properties = Some(v);
            self
        }
        pub fn set_exclude_retained_variant_properties(mut self, input: std::option::Option<std::vec::Vec<crate::model::VariantProperty>>) -> Self {
            self.exclude_retained_variant_properties = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
        pub fn build(self) -> crate::input::UpdateEndpointInput {
            crate::input::UpdateEndpointInput {
                endpoint_name: self.endpoint_name,
                endpoint_config_name: self.endpoint_config_name,
                retain_all_variant_properties: self.retain_all_variant_properties,
                exclude_retained_variant_properties: self.exclude_retained_variant_properties,
            }
        }
    }
}
impl UpdateEndpointInput {
    /// Creates a new builder-style object to manufacture [`UpdateEndpointInput`](crate::input::UpdateEndpointInput)
    pub fn builder() -> crate::input::update_endpoint_input::Builder {
        crate::input::update_endpoint_input::Builder::default()
    }
}

impl UpdateEndpointInput {
    /// Serializes this input into an Operation<[`UpdateEndpoint`](crate::operation::UpdateEndpoint)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateEndpoint>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateEndpoint::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "UpdateEndpoint",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.UpdateEndpoint")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, serde::Deserialize, std::clone::Clone, std::cmp::PartialEq, std::cmp::Eq, std::hash::Hash, std::fmt::Debug, std::default::Default)]
pub struct DeleteEndpointInput {
    #[serde(rename = "EndpointName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_name: std::option::Option<std::string::String>,
}
impl DeleteEndpointInput {
    pub fn endpoint_name(&self) -> std::option::Option<&str> {
        self.endpoint_name.as_deref()
    }
}
/// See [`DeleteEndpointInput`](crate::input::DeleteEndpointInput)
pub mod delete_endpoint_input {
    /// A builder for [`DeleteEndpointInput`](crate::input::DeleteEndpointInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        endpoint_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteEndpointInput`](crate::input::DeleteEndpointInput)
        pub fn build(self) -> crate::input::DeleteEndpointInput {
            crate::input::DeleteEndpointInput {
                endpoint_name: self.endpoint_name,
            }
        }
    }
}
impl DeleteEndpointInput {
    /// Creates a new builder-style object to manufacture [`DeleteEndpointInput`](crate::input::DeleteEndpointInput)
    pub fn builder() -> crate::input::delete_endpoint_input::Builder {
        crate::input::delete_endpoint_input::Builder::default()
    }
}

impl DeleteEndpointInput {
    /// Serializes this input into an Operation<[`DeleteEndpoint`](crate::operation::DeleteEndpoint)> configured from `config`
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteEndpoint>,
        smithy_http::operation::BuildError,
    > {
        let body = crate::serde_util::serialize_body(self)?;
        let request = Self::assemble(self.request_builder_base(), body)?;
        let mut request = smithy_http::operation::Request::new(request);
        crate::config::populate_properties(config, request.properties_mut());
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteEndpoint::new())
            .with_metadata(smithy_http::operation::Metadata::new(
                "DeleteEndpoint",
                "sagemaker",
            ));
        Ok(op)
    }

    fn request_builder_base(&self) -> http::request::Builder {
        http::request::Builder::new()
            .method("POST")
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("X-Amz-Target", "SageMaker.DeleteEndpoint")
    }

    fn assemble(
        mut builder: http::request::Builder,
        body: smithy_http::body::SdkBody,
    ) -> std::result::Result<http::Request<smithy_http::body::SdkBody>, smithy_http::operation::BuildError>
    {
        if let Some(content_length) = body.content_length() {
            builder = builder.header(http::header::CONTENT_LENGTH, content_length);
        }
        builder
            .body(body)
            .map_err(|err| smithy_http::operation::BuildError::Other(err.into()))
    }
}
