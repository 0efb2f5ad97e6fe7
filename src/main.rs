use clap::Parser;
use planka_boards::utils::error::ErrorSeverity;
use planka_boards::utils::{logger, validation::Validate};
use planka_boards::{connect, Cli, Command, CreateBoardOptions, PlankaError, UpdateBoardOptions};
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    if settings.log_json {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Client config: {:?}", settings.client);

    // 驗證配置
    if let Err(e) = settings.client.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if let Err(e) = run(&settings.client, cli.command).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        exit_with(&e);
    }
}

async fn run(config: &planka_boards::ClientConfig, command: Command) -> planka_boards::Result<()> {
    let service = connect(config)?;

    match command {
        Command::Create {
            project_id,
            name,
            position,
        } => {
            let mut options = CreateBoardOptions::new(project_id, name);
            if let Some(position) = position {
                options = options.with_position(position);
            }
            let (board, report) = service.create_board_with_report(options).await?;
            for failure in &report.failures {
                eprintln!("⚠️ {}", failure);
            }
            print_json(&board)
        }
        Command::List { project_id } => print_json(&service.get_boards(&project_id).await),
        Command::Get { id } => print_json(&service.get_board(&id).await?),
        Command::Update { id, name, position } => {
            let options = UpdateBoardOptions { name, position };
            print_json(&service.update_board(&id, options).await?)
        }
        Command::Delete { id } => print_json(&service.delete_board(&id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> planka_boards::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_with(e: &PlankaError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 1,
        ErrorSeverity::High => 3,
    };
    std::process::exit(exit_code);
}
