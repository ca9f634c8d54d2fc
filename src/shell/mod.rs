mod command;
mod splash;
mod view;

pub use command::{ShellCommand, ShellLine};
pub use splash::SplashTimer;

use std::time::Duration;

use anyhow::Result;
use askama::Template;
use chefmenu_menu::{AddItemInput, ItemStore, MenuAggregator};
use chefmenu_shared::{CourseFilter, Error};
use clap::CommandFactory;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::oneshot;

use crate::config::ShellConfig;
use view::{CardView, FilterView, HomeView, ListView, SplashView};

pub enum Outcome {
    Render(String),
    Quit,
}

/// Presentation layer over the item store: turns command lines into views.
pub struct Shell {
    store: ItemStore,
    currency: String,
}

impl Shell {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            store: ItemStore::new(),
            currency: currency.into(),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        if line.trim().is_empty() {
            return Ok(Outcome::Render(String::new()));
        }

        let command = match ShellLine::parse_line(line) {
            Ok(parsed) => parsed.command,
            Err(err) => return Ok(Outcome::Render(err.to_string())),
        };

        let output = match command {
            ShellCommand::Home => self.home()?,
            ShellCommand::Add {
                course,
                price,
                name,
            } => self.add(name.join(" "), price, course),
            ShellCommand::Remove { id } => self.remove(id),
            ShellCommand::Filter { terms } => self.filter(&terms)?,
            ShellCommand::Card { id } => self.card(id)?,
            ShellCommand::List => self.list()?,
            ShellCommand::Help => ShellLine::command().render_help().to_string(),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Render(output))
    }

    fn home(&self) -> Result<String> {
        let overview = MenuAggregator::overview(self.store.items());

        Ok(HomeView {
            currency: &self.currency,
            overview: &overview,
        }
        .render()?)
    }

    fn add(&mut self, name: String, price: String, course: String) -> String {
        if name.trim().is_empty() || price.trim().is_empty() {
            return "Please fill in all fields.".to_string();
        }

        match self.store.add(AddItemInput::new(name, price, course)) {
            Ok(item) => format!("\"{}\" added successfully!", item.name),
            Err(err) => err.to_string(),
        }
    }

    fn remove(&mut self, id: u64) -> String {
        match self.store.remove(id) {
            Ok(item) => format!("\"{}\" removed.", item.name),
            Err(err) => err.to_string(),
        }
    }

    /// A leading word naming a course (or "all") selects it, the rest is the
    /// search term.
    fn filter(&self, terms: &[String]) -> Result<String> {
        let (filter, search) = match terms.split_first() {
            Some((first, rest)) => match first.parse::<CourseFilter>() {
                Ok(filter) => (filter, rest.join(" ")),
                Err(_) => (CourseFilter::All, terms.join(" ")),
            },
            None => (CourseFilter::All, String::new()),
        };

        let query = MenuAggregator::query(self.store.items(), filter, &search);

        Ok(FilterView {
            currency: &self.currency,
            filter,
            search: &search,
            query: &query,
        }
        .render()?)
    }

    fn card(&self, id: u64) -> Result<String> {
        let Some(item) = self.store.get(id) else {
            return Ok(Error::NotFound(format!("menu item {id}")).to_string());
        };

        Ok(CardView {
            currency: &self.currency,
            item,
        }
        .render()?)
    }

    fn list(&self) -> Result<String> {
        Ok(ListView {
            currency: &self.currency,
            counts: MenuAggregator::count_by_course(self.store.items()),
            items: self.store.items(),
        }
        .render()?)
    }
}

/// Interactive session on stdin/stdout: splash first, then one command per
/// line until `quit` or end of input.
#[tracing::instrument(skip(config))]
pub async fn run(config: &ShellConfig) -> Result<()> {
    let mut stdout = tokio::io::stdout();

    session(config, tokio::io::stdin(), &mut stdout).await
}

/// Runs a shell session over any line source and sink.
///
/// A line typed while the splash is up skips it and is executed once the
/// home view is shown.
pub async fn session<R, W>(config: &ShellConfig, input: R, output: &mut W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    write_block(output, &SplashView.render()?).await?;

    let (done_tx, done_rx) = oneshot::channel();
    let timer = SplashTimer::start(Duration::from_secs(config.splash_secs), move || {
        let _ = done_tx.send(());
    });

    let early_line = tokio::select! {
        _ = done_rx => {
            tracing::debug!("splash finished");
            None
        }
        line = lines.next_line() => {
            tracing::debug!("splash skipped");
            match line? {
                Some(line) => Some(line),
                None => return Ok(()),
            }
        }
    };
    drop(timer);

    let mut shell = Shell::new(config.currency.clone());
    write_block(output, &shell.home()?).await?;
    write_block(output, "Type 'help' for commands.").await?;

    let mut pending = early_line;

    loop {
        let line = match pending.take() {
            Some(line) => line,
            None => {
                output.write_all(b"> ").await?;
                output.flush().await?;

                let Some(line) = lines.next_line().await? else {
                    break;
                };
                line
            }
        };

        match shell.execute(&line)? {
            Outcome::Render(rendered) => write_block(output, &rendered).await?,
            Outcome::Quit => break,
        }
    }

    tracing::info!(items = shell.store().len(), "Shell session ended");

    Ok(())
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, block: &str) -> Result<()> {
    let block = block.trim_end();

    if !block.is_empty() {
        output.write_all(block.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}
