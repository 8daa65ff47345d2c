//! openai-adapter-probe — 对 OpenAI 兼容端点做一次内容生成探测
//!
//! Usage:
//!   openai-adapter-probe generate <prompt...>     One generate-content call
//!   openai-adapter-probe count <prompt...>        Local token estimate
//!   openai-adapter-probe config                   Show resolved configuration
//!
//! Reads OPENAI_BASE_URL, OPENAI_MODEL and OPENAI_API_KEY from the environment.
//! Set RUST_LOG=genai_openai_adapter=debug for request/response traces.

use genai_openai_adapter::telemetry::TracingEventSink;
use genai_openai_adapter::{
    AdapterConfig, ContentGenerator, CountTokensRequest, ErrorContext, GenerateContentRequest,
    OpenAiContentGenerator, OpenAiContentGeneratorBuilder,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]).await,
        "count" => cmd_count(&args[2..]).await,
        "config" => cmd_config(),
        "version" | "--version" | "-V" => {
            println!("openai-adapter-probe {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}

fn print_usage() {
    println!(
        r#"openai-adapter-probe — generate-content over an OpenAI-compatible server

USAGE:
    openai-adapter-probe <COMMAND> [ARGS]

COMMANDS:
    generate <prompt...>    Send one prompt and print the translated response
    count <prompt...>       Print the local token estimate for a prompt
    config                  Show the configuration resolved from the environment
    version                 Show version information
    help                    Show this help message

ENVIRONMENT:
    OPENAI_BASE_URL         Endpoint root, e.g. http://localhost:8000/v1
    OPENAI_MODEL            Model name sent on every request
    OPENAI_API_KEY          Optional bearer token
    AI_HTTP_TIMEOUT_SECS    Optional whole-request timeout
    AI_PROXY_URL            Optional HTTP proxy"#
    );
}

fn prompt_from(args: &[String]) -> genai_openai_adapter::Result<String> {
    let prompt = args.join(" ");
    if prompt.trim().is_empty() {
        return Err(genai_openai_adapter::Error::configuration_with_context(
            "missing prompt",
            ErrorContext::new().with_source("argv"),
        ));
    }
    Ok(prompt)
}

fn generator() -> genai_openai_adapter::Result<OpenAiContentGenerator> {
    OpenAiContentGeneratorBuilder::from_config(AdapterConfig::from_env()?)
        .event_sink(Arc::new(TracingEventSink))
        .build()
}

async fn cmd_generate(args: &[String]) -> genai_openai_adapter::Result<()> {
    let prompt = prompt_from(args)?;
    let response = generator()?
        .generate_content(&GenerateContentRequest::new(prompt))
        .await?;

    if !response.text.is_empty() {
        println!("{}", response.text);
    }
    for call in &response.function_calls {
        println!("→ {}({})", call.name, call.args);
    }
    let usage = response.usage_metadata;
    eprintln!(
        "finish={} prompt_tokens={} completion_tokens={} total_tokens={}",
        response.finish_reason().map(|r| r.as_str()).unwrap_or("-"),
        usage.prompt_token_count,
        usage.candidates_token_count,
        usage.total_token_count,
    );
    Ok(())
}

async fn cmd_count(args: &[String]) -> genai_openai_adapter::Result<()> {
    let prompt = prompt_from(args)?;
    let count = generator()?
        .count_tokens(&CountTokensRequest::new(prompt))
        .await?;
    println!("{}", count.total_tokens);
    Ok(())
}

fn cmd_config() -> genai_openai_adapter::Result<()> {
    let config = AdapterConfig::from_env()?;
    println!("{config:#?}");
    Ok(())
}
