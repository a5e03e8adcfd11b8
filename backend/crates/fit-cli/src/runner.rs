//! Executes parsed commands against the store and renders the result as JSON.

use crate::{
    commands::Commands,
    error::{CliError, Result as CliErrorResult},
    plan_commands::PlanCommands,
    profile_commands::ProfileCommands,
    user_commands::UserCommands,
};

use fit_core::{Meal, PlanEntry, ProfileAttributes, User, WorkoutDay};
use fit_db::{DbError, PlanStore, StoreOptions};

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use log::info;
use serde_json::{Value, json};

pub const TEST_USERNAME: &str = "test_user";

/// Run one command. The returned value is what the binary prints.
pub async fn execute(store: &PlanStore, command: Commands) -> CliErrorResult<Value> {
    match command {
        Commands::InitDb => init_db(store).await,

        Commands::User { action } => match action {
            UserCommands::Ensure { username } => {
                let (user_id, created) = store.get_or_create_user(&username).await?;
                Ok(json!({ "user_id": user_id, "created": created }))
            }
            UserCommands::Show { username } => {
                let user = require_user(store, &username).await?;
                to_json(&user)
            }
        },

        Commands::Profile { action } => match action {
            ProfileCommands::Get { username } => {
                let user = require_user(store, &username).await?;
                let profile = store.get_profile(user.id).await?;
                to_json(&profile)
            }
            ProfileCommands::Set { username, json } => {
                let attributes = parse_profile(&json)?;
                let (user_id, _) = store.get_or_create_user(&username).await?;
                let profile = store.save_profile(user_id, &attributes).await?;
                to_json(&profile)
            }
        },

        Commands::Workout { action } => match action {
            PlanCommands::Save {
                username,
                name,
                file,
            } => {
                let days: Vec<WorkoutDay> = read_plan_document(&file)?;
                let name = name.unwrap_or_else(|| WorkoutDay::default_plan_name(days.len()));
                save_plan(store, &username, &name, &days).await
            }
            PlanCommands::List { username } => list_plans::<WorkoutDay>(store, &username).await,
        },

        Commands::Diet { action } => match action {
            PlanCommands::Save {
                username,
                name,
                file,
            } => {
                let meals: Vec<Meal> = read_plan_document(&file)?;
                let name =
                    name.unwrap_or_else(|| Meal::default_plan_name(Local::now().date_naive()));
                save_plan(store, &username, &name, &meals).await
            }
            PlanCommands::List { username } => list_plans::<Meal>(store, &username).await,
        },
    }
}

/// Translate the loaded configuration into store connection options
pub fn store_options(config: &fit_config::Config) -> CliErrorResult<StoreOptions> {
    let options = StoreOptions::new(config.database_path()?)
        .max_connections(config.database.max_connections)
        .busy_timeout(Duration::from_secs(config.database.busy_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs));

    Ok(options)
}

async fn init_db(store: &PlanStore) -> CliErrorResult<Value> {
    let (user_id, created) = store.get_or_create_user(TEST_USERNAME).await?;

    if created {
        let attributes = sample_profile();
        store.save_profile(user_id, &attributes).await?;
        info!("Seeded {} (user_id: {})", TEST_USERNAME, user_id);
    }

    Ok(json!({
        "initialized": true,
        "test_user": { "user_id": user_id, "created": created },
    }))
}

fn sample_profile() -> ProfileAttributes {
    let mut attributes = ProfileAttributes::new();
    attributes.insert("name".into(), json!("Test User"));
    attributes.insert("age".into(), json!(30));
    attributes.insert("fitness_level".into(), json!("intermediate"));
    attributes.insert("goals".into(), json!("general fitness"));
    attributes
}

/// Lookups never create users
async fn require_user(store: &PlanStore, username: &str) -> CliErrorResult<User> {
    store
        .find_user(username)
        .await?
        .ok_or_else(|| CliError::from(DbError::not_found("user", username.trim())))
}

async fn save_plan<P: PlanEntry>(
    store: &PlanStore,
    username: &str,
    name: &str,
    entries: &[P],
) -> CliErrorResult<Value> {
    let (user_id, _) = store.get_or_create_user(username).await?;
    let plan_id = store.save_plan(user_id, name, entries).await?;

    Ok(json!({
        "plan_id": plan_id,
        "user_id": user_id,
        "kind": P::KIND,
        "name": name.trim(),
    }))
}

async fn list_plans<P: PlanEntry>(store: &PlanStore, username: &str) -> CliErrorResult<Value> {
    let user = require_user(store, username).await?;
    let plans = store.get_plans::<P>(user.id).await?;
    to_json(&plans)
}

fn parse_profile(raw: &str) -> CliErrorResult<ProfileAttributes> {
    match serde_json::from_str::<Value>(raw).map_err(|e| CliError::from_json("profile", e))? {
        Value::Object(attributes) => Ok(attributes),
        other => Err(CliError::invalid_input(format!(
            "profile must be a JSON object, got {}",
            json_type(&other)
        ))),
    }
}

/// Read a plan document (a JSON array of entries) from a file, or stdin for "-"
fn read_plan_document<P: PlanEntry>(path: &Path) -> CliErrorResult<Vec<P>> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| CliError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    serde_json::from_str(&raw)
        .map_err(|e| CliError::from_json(&format!("{} plan document", P::KIND), e))
}

fn to_json<T: serde::Serialize>(value: &T) -> CliErrorResult<Value> {
    serde_json::to_value(value).map_err(|e| CliError::from_json("output", e))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

