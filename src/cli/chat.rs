use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{AnswerClient, Session};
use crate::core::{AppConfig, logging};

const CLEAR_COMMAND: &str = "/clear";

pub async fn run() -> Result<()> {
    logging::init(logging::repl_filter());
    let config = AppConfig::from_env()?;
    let client = AnswerClient::new(&config)?;
    let session = Session::new();
    let mut rl = DefaultEditor::new()?;

    println!("HR Policy Assistant ({})", client.api_url());
    println!(
        "Ask anything about company HR policies. Type {} to start over, Ctrl-D to quit.\n",
        CLEAR_COMMAND
    );

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let question = line.trim();
                if question.is_empty() {
                    continue;
                }
                if question == CLEAR_COMMAND {
                    session.reset().await;
                    println!("Chat cleared.\n");
                    continue;
                }
                let _ = rl.add_history_entry(question);

                let turn = session.submit(&client, question).await;
                println!("{}\n", turn.answer.unwrap_or_default());
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
