//! Client example submitting transactions to an in-process server.
//!
//! Run with: cargo run -p evaluator-app --example client_example

use evaluator_client::{ClientError, EvaluatorClient};
use evaluator_hex::{EvaluationService, inbound::HttpServer};
use evaluator_types::{Currency, CustomerInfo, PaymentMethod, TransactionEvaluationRequest};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an ephemeral port and serve the router in the background
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    let router = HttpServer::new(EvaluationService::new()).router();

    println!("🚀 Starting server on port {port}...");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = EvaluatorClient::new(format!("http://127.0.0.1:{port}"));

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    let customer = CustomerInfo {
        customer_id: "cust_123".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "+1234567890".to_string(),
        ip_address: "192.168.1.1".to_string(),
    };

    // Accepted transaction
    let req = TransactionEvaluationRequest::new(
        10000,
        Currency::USD,
        PaymentMethod::Card,
        customer.clone(),
    );
    let resp = client.evaluate(&req).await?;
    println!(
        "✅ {}: {} {} via {}",
        resp.message, resp.data.amount_in_cents, resp.data.currency, resp.data.payment_method
    );

    // Rejected transactions
    let rejected = [
        TransactionEvaluationRequest {
            amount_in_cents: 0,
            ..req.clone()
        },
        TransactionEvaluationRequest {
            currency: "GBP".to_string(),
            ..req.clone()
        },
        TransactionEvaluationRequest::new(
            2500,
            Currency::COP,
            PaymentMethod::Crypto,
            CustomerInfo {
                email: "invalid@domain".to_string(),
                ..customer
            },
        ),
    ];

    for req in &rejected {
        match client.evaluate(req).await {
            Err(ClientError::Api { status, error, details }) => {
                println!("❌ {status} {error}: {details}");
            }
            other => anyhow::bail!("expected a rejection, got {other:?}"),
        }
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
