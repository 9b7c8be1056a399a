//! sysparam-client CLI entry point.

use clap::Parser;
use sysparam_client::cli::{Cli, Commands, OutputFormat};
use sysparam_client::client::SysparamClient;
use sysparam_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = match &cli.user {
        Some(user) => SysparamClient::new(&cli.base_url).with_user(user),
        None => SysparamClient::new(&cli.base_url),
    };

    match cli.command {
        Commands::Auth(auth_cmd) => {
            use sysparam_client::cli::auth::AuthAction;
            match auth_cmd.action {
                AuthAction::Login { username, password } => {
                    let response = client.login(&username, &password).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => println!(
                            "{}\n{}",
                            response.message,
                            pretty::format_user(&response.user)
                        ),
                    }
                }
                AuthAction::Verify { code, mode } => {
                    let response = client.verify(&code, &mode).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}\n  Token: {}", response.message, response.token)
                        }
                    }
                }
            }
        }
        Commands::Parameters(parameters_cmd) => {
            use sysparam_client::cli::parameters::ParametersAction;
            match parameters_cmd.action {
                ParametersAction::Submit(args) => {
                    let request = args.into_request()?;
                    let response = client.submit_parameter(&request).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}\n  ID: {}", response.message, response.record_id)
                        }
                    }
                }
                ParametersAction::List { status } => {
                    let parameters = client.list_parameters(status).await?;
                    match cli.format {
                        OutputFormat::Json => {
                            println!("{}", format_output(&parameters, cli.format))
                        }
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_parameters(&parameters))
                        }
                    }
                }
                ParametersAction::Get { id } => {
                    let parameter = client.get_parameter(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&parameter, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_parameter(&parameter))
                        }
                    }
                }
                ParametersAction::Authorize { id } => {
                    let response = client.authorize_parameter(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => println!(
                            "Authorized:\n{}",
                            pretty::format_parameter(&response.data)
                        ),
                    }
                }
                ParametersAction::Reject { id, reason } => {
                    let response = client.reject_parameter(id, &reason).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Rejected:\n{}", pretty::format_parameter(&response.data))
                        }
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use sysparam_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Live => {
                    let alive = client.livez().await?;
                    if !cli.quiet {
                        println!("{}", if alive { "alive" } else { "not alive" });
                    }
                    if !alive {
                        std::process::exit(1);
                    }
                }
                HealthAction::Ready => {
                    let health = client.healthz().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
                    }
                    if !health.is_ok() {
                        std::process::exit(1);
                    }
                }
            }
        }
    }

    Ok(())
}
