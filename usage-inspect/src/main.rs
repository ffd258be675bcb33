//! usage-inspect: print the resolved entitlement of an account
//!
//! Fetches the plan catalog, the account subscription and its limits
//! concurrently, then prints a JSON report on stdout. Configuration comes
//! from the environment (or a `.env` file).

mod config;
mod report;

use config::Config;
use report::Report;
use usage_client::{BearerToken, CancellationToken, UsageClient, UserContext};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing (stderr, stdout carries the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usage_inspect=info,usage_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let client = config.client.build_client()?;

    tracing::info!(
        base_url = client.base_url(),
        user_id = %config.user_id,
        "Inspecting account entitlement"
    );

    // Ctrl-C aborts in-flight requests
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let token = BearerToken::new(config.access_token.clone());
    let user = UserContext::new(&config.user_id, &token);

    let (plans, subscription, limits) = UsageClient::cancellable(&cancel, async {
        tokio::try_join!(
            client.list_subscription_plans_with_pricing_systems(config.include_legacy, Some(user)),
            client.get_user_subscription(user),
            client.get_user_limits(user),
        )
    })
    .await?;

    tracing::info!(
        plans = plans.len(),
        plan_id = ?subscription.plan_id,
        "Fetched account data"
    );

    let report = Report::build(&plans, &subscription, &limits, &config.locale);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
