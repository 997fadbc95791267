use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use commander_assistant::providers::ChatMessage;
use commander_assistant::{CommanderAssistant, Mode};

#[derive(Parser)]
#[command(
    name = "commander-assistant",
    version,
    about = "Commander deck, card and rules assistant"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one tool with JSON arguments
    Tool {
        /// Tool name, e.g. searchCards
        name: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
        /// Print the raw JSON result instead of Markdown
        #[arg(long)]
        json: bool,
    },
    /// List available tools and their parameter schemas
    Tools,
    /// Ask a one-off question
    Chat {
        message: String,
        #[arg(long, value_enum, default_value_t = ModeArg::Default)]
        mode: ModeArg,
        /// Also print model reasoning, when the model emits any
        #[arg(long)]
        show_reasoning: bool,
    },
    /// Generate a conversation title for a first message
    Title { message: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Default,
    Reasoning,
    Search,
    SearchReasoning,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Default => Mode::Default,
            ModeArg::Reasoning => Mode::Reasoning,
            ModeArg::Search => Mode::Search,
            ModeArg::SearchReasoning => Mode::SearchReasoning,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            let _ = writeln!(stdout, "{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = writeln!(std::io::stderr(), "error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    match cli.command {
        Command::Tools => {
            let definitions = commander_assistant::tools::tool_definitions();
            Ok(serde_json::to_string_pretty(&definitions)?)
        }
        Command::Tool { name, args, json } => {
            let assistant = CommanderAssistant::from_env()?;
            let arguments: serde_json::Value = serde_json::from_str(&args)?;
            let result = assistant.dispatch(&name, arguments)?;
            if json {
                Ok(serde_json::to_string_pretty(&result)?)
            } else {
                Ok(result.to_markdown())
            }
        }
        Command::Chat {
            message,
            mode,
            show_reasoning,
        } => {
            let assistant = CommanderAssistant::from_env()?;
            let reply = assistant
                .chat()
                .reply(mode.into(), &[ChatMessage::user(message)])?;
            match reply.reasoning {
                Some(reasoning) if show_reasoning => {
                    Ok(format!("<reasoning>\n{}\n</reasoning>\n\n{}", reasoning, reply.text))
                }
                _ => Ok(reply.text),
            }
        }
        Command::Title { message } => {
            let assistant = CommanderAssistant::from_env()?;
            Ok(assistant.chat().generate_title(&message))
        }
    }
}
