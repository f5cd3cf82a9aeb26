//! Deploy command: resolve settings, build the request, stage and publish

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tagdeploy::application::CancelFlag;
use tagdeploy::config::{self, Settings};
use tagdeploy::domain::ports::IdentityResolver;
use tagdeploy::domain::value_objects::IdentitySpec;
use tagdeploy::infrastructure::identity::{current_primary_group_id, current_user_id};
use tagdeploy::infrastructure::SystemIdentityResolver;
use tagdeploy::presentation::{factory, output, OutputFormat};
use tagdeploy::{DeployError, DeploymentRequest};

use crate::cli::DeployArgs;

pub fn cmd_deploy(
    args: DeployArgs,
    settings_path: Option<&Path>,
    format: OutputFormat,
    cancel: CancelFlag,
) -> Result<()> {
    let settings = config::load_or_default(settings_path)?;
    let request = build_request(args, &settings, &SystemIdentityResolver::new())?;

    let use_case = factory::create_deploy_use_case(&settings.source.git, format, cancel);
    let published = use_case.execute(&request)?;

    output::render_published(&mut io::stdout().lock(), format, &published)?;
    Ok(())
}

/// Merge CLI flags over settings into an immutable request
pub fn build_request(
    args: DeployArgs,
    settings: &Settings,
    resolver: &impl IdentityResolver,
) -> Result<DeploymentRequest> {
    let source = args
        .source_repo
        .or_else(|| settings.source.repository.clone())
        .ok_or_else(|| missing("--source-repo"))?;
    let tag = args.tag.ok_or_else(|| missing("--tag"))?;
    let config_file = args.config.ok_or_else(|| missing("--config"))?;
    let data_dir = args.data.ok_or_else(|| missing("--data"))?;

    let uid = match args.www_user.as_ref().or(settings.identity.user.as_ref()) {
        Some(user) => resolver.resolve_user(&parse_spec(user)?)?,
        None => current_user_id(),
    };
    let gid = match args.www_group.as_ref().or(settings.identity.group.as_ref()) {
        Some(group) => resolver.resolve_group(&parse_spec(group)?)?,
        None => current_primary_group_id(),
    };

    let destination = args
        .destination
        .or_else(|| settings.deploy.destination.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let name = args.name.unwrap_or_else(|| settings.deploy.name.clone());
    let staging_parent = args.staging_dir.or_else(|| settings.deploy.staging_dir.clone());

    let request = DeploymentRequest::builder(source, tag)
        .config_file(config_file)
        .data_dir(data_dir)
        .owner(uid, gid)
        .destination(destination)
        .name(name)
        .staging_parent(staging_parent)
        .ensure_files(settings.deploy.ensure_files.clone())
        .build()?;
    Ok(request)
}

fn parse_spec(raw: &str) -> Result<IdentitySpec, DeployError> {
    raw.parse::<IdentitySpec>().map_err(|e| DeployError::InvalidRequest {
        message: e.to_string(),
    })
}

fn missing(flag: &str) -> DeployError {
    DeployError::InvalidRequest {
        message: format!("{} is required", flag),
    }
}
