//! Interactive shell over the voting controller

use crate::output::formatter::OutputFormatter;
use crate::output::live::follow_result;
use crate::progress::LoadingSpinner;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::task::JoinHandle;
use tracing::debug;
use votacao_application::{ViewState, VotingApi, VotingController};
use votacao_domain::{AgendaId, VoteChoice};

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List,
    Create { title: String, description: String },
    Open(AgendaId),
    Vote {
        id: AgendaId,
        cpf: Option<String>,
        choice: Option<VoteChoice>,
    },
    Follow(AgendaId),
    Show,
    Close,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let require_id = |usage: &str| -> Result<AgendaId, String> {
            rest.split_whitespace()
                .next()
                .map(AgendaId::from)
                .ok_or_else(|| format!("Usage: {}", usage))
        };

        match word.to_lowercase().as_str() {
            "help" | "h" | "?" => Ok(Self::Help),
            "list" | "ls" => Ok(Self::List),
            "create" | "new" => {
                let (title, description) = rest.split_once('|').unwrap_or((rest, ""));
                let title = title.trim();
                if title.is_empty() {
                    return Err("Usage: create <title> [| <description>]".to_string());
                }
                Ok(Self::Create {
                    title: title.to_string(),
                    description: description.trim().to_string(),
                })
            }
            "open" => require_id("open <id>").map(Self::Open),
            "vote" => {
                let mut args = rest.split_whitespace();
                let id = args
                    .next()
                    .map(AgendaId::from)
                    .ok_or_else(|| "Usage: vote <id> [<cpf> [yes|no]]".to_string())?;
                let cpf = args.next().map(str::to_string);
                let choice = args
                    .next()
                    .map(|c| c.parse::<VoteChoice>().map_err(|e| e.to_string()))
                    .transpose()?;
                Ok(Self::Vote { id, cpf, choice })
            }
            "result" | "res" => require_id("result <id>").map(Self::Follow),
            "show" => Ok(Self::Show),
            "close" => Ok(Self::Close),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!(
                "Unknown command: {}\nType help for available commands",
                other
            )),
        }
    }
}

/// Interactive REPL for browsing, voting and following results
pub struct VotingShell<A: VotingApi + 'static> {
    controller: VotingController<A>,
    formatter: Arc<dyn OutputFormatter>,
    show_progress: bool,
    follower: Option<JoinHandle<()>>,
}

impl<A: VotingApi + 'static> VotingShell<A> {
    pub fn new(controller: VotingController<A>, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            controller,
            formatter: Arc::from(formatter),
            show_progress: true,
            follower: None,
        }
    }

    /// Set whether to show spinners
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn controller(&self) -> &VotingController<A> {
        &self.controller
    }

    /// Run the shell on stdin
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with(BufReader::new(tokio::io::stdin())).await
    }

    /// Run the shell on any line source
    pub async fn run_with<R: AsyncBufRead + Unpin>(&mut self, input: R) -> std::io::Result<()> {
        let mut lines = input.lines();
        self.print_welcome();
        self.list().await;

        loop {
            prompt("votacao> ");
            let Some(line) = lines.next_line().await? else {
                println!("Bye!");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => {
                    println!("Bye!");
                    break;
                }
                Ok(command) => self.dispatch(command, &mut lines).await?,
                Err(message) => println!("{}", message),
            }
        }

        self.close_result().await;
        Ok(())
    }

    async fn dispatch<R: AsyncBufRead + Unpin>(
        &mut self,
        command: ShellCommand,
        lines: &mut Lines<R>,
    ) -> std::io::Result<()> {
        debug!("shell command: {:?}", command);
        match command {
            ShellCommand::Help => self.print_help(),
            ShellCommand::List => self.list().await,
            ShellCommand::Create { title, description } => {
                let created = LoadingSpinner::wrap(
                    "Creating agenda item...",
                    self.show_progress,
                    self.controller.create_item(&title, &description),
                )
                .await;
                if let Ok(item) = created {
                    print!("{}", self.formatter.format_item(&item));
                }
            }
            ShellCommand::Open(id) => {
                let _ = LoadingSpinner::wrap(
                    "Opening session...",
                    self.show_progress,
                    self.controller.open_session(&id),
                )
                .await;
            }
            ShellCommand::Vote { id, cpf, choice } => self.vote(id, cpf, choice, lines).await?,
            ShellCommand::Follow(id) => self.open_result(id).await,
            ShellCommand::Show => self.show(),
            ShellCommand::Close => {
                self.close_result().await;
                println!("Result closed.");
            }
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    async fn list(&mut self) {
        let loaded = LoadingSpinner::wrap(
            "Loading agenda...",
            self.show_progress,
            self.controller.refresh(),
        )
        .await;
        if let Ok(items) = loaded {
            print!("{}", self.formatter.format_agenda(&items));
        }
    }

    /// Drive the vote dialog: prompt until the vote is recorded or cancelled
    async fn vote<R: AsyncBufRead + Unpin>(
        &mut self,
        id: AgendaId,
        mut cpf: Option<String>,
        choice: Option<VoteChoice>,
        lines: &mut Lines<R>,
    ) -> std::io::Result<()> {
        self.controller.begin_vote(id);

        while self.controller.vote_dialog().is_open() {
            let input = match cpf.take() {
                Some(cpf) => cpf,
                None => {
                    prompt("CPF (empty to cancel): ");
                    lines.next_line().await?.unwrap_or_default()
                }
            };
            if input.trim().is_empty() {
                self.controller.cancel_vote();
                println!("Vote cancelled.");
                break;
            }

            let selected = match choice {
                Some(choice) => choice,
                None => prompt_choice(lines).await?,
            };

            let dialog = self.controller.vote_dialog_mut();
            dialog.set_cpf(&input);
            dialog.set_choice(selected);

            let submitted = LoadingSpinner::wrap(
                "Submitting vote...",
                self.show_progress,
                self.controller.submit_vote(),
            )
            .await;
            if let Err(e) = submitted {
                debug!("vote not recorded: {}", e);
            }
        }
        Ok(())
    }

    async fn open_result(&mut self, id: AgendaId) {
        self.stop_follower();
        let title = self.controller.board().get(&id).map(|item| item.title);

        LoadingSpinner::wrap(
            "Loading result...",
            self.show_progress,
            self.controller.open_result(id),
        )
        .await;

        let rx = self.controller.subscribe_result();
        let formatter = Arc::clone(&self.formatter);
        self.follower = Some(tokio::spawn(async move {
            let state = follow_result(rx, |id, tally| {
                print!("{}", formatter.format_tally(id, title.as_deref(), tally));
            })
            .await;
            if state == ViewState::Settled {
                println!("Session closed. Final result shown above.");
            }
        }));
    }

    fn show(&self) {
        let view = self.controller.result_view();
        match (&view.item, &view.tally) {
            (Some(id), Some(tally)) => {
                let title = self.controller.board().get(id).map(|item| item.title);
                print!("{}", self.formatter.format_tally(id, title.as_deref(), tally));
            }
            (Some(id), None) => println!("Result for {} is still loading.", id),
            _ => println!("No result open. Use: result <id>"),
        }
    }

    async fn close_result(&mut self) {
        self.controller.close_result().await;
        self.stop_follower();
    }

    fn stop_follower(&mut self) {
        if let Some(handle) = self.follower.take() {
            handle.abort();
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            votacao - Interactive            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type help for available commands");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  list, ls                          - Reload and show the agenda");
        println!("  create <title> [| <description>]  - Create an agenda item");
        println!("  open <id>                         - Open a voting session");
        println!("  vote <id> [<cpf> [yes|no]]        - Cast a vote");
        println!("  result <id>                       - Follow the tally live");
        println!("  show                              - Show the current tally");
        println!("  close                             - Stop following the tally");
        println!("  help, h, ?                        - Show this help");
        println!("  quit, exit, q                     - Exit");
        println!();
    }
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

/// Ask for yes/no until the answer parses; empty input picks YES
async fn prompt_choice<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
) -> std::io::Result<VoteChoice> {
    loop {
        prompt("Choice [yes/no] (yes): ");
        let answer = lines.next_line().await?.unwrap_or_default();
        if answer.trim().is_empty() {
            return Ok(VoteChoice::default());
        }
        match answer.parse() {
            Ok(choice) => return Ok(choice),
            Err(e) => println!("{}", e),
        }
    }
}
