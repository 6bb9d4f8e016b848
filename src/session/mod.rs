//! The interactive menu loop and its three reading workflows.
//!
//! One free-form input drives each state; anything invalid is reported
//! and control falls back to the menu. Only the explicit exit choice
//! leaves the loop. All durable state flows through the store: the file
//! is written first, then the in-memory view is updated to match.

pub mod input;
pub mod render;

use crossterm::style::Stylize;

use crate::aggregator;
use crate::app::{AppContext, Result};
use crate::domain::{ArticleRef, ReadLog, SavedQueue};
use crate::pager::Pager;
use crate::progress::{Spinner, SpinnerStyle};
use crate::store::Store;

pub struct Session {
    ctx: AppContext,
    feeds: Vec<String>,
    read_log: ReadLog,
    saved: SavedQueue,
    pager: Pager,
    spinner_style: SpinnerStyle,
}

impl Session {
    pub fn new(ctx: AppContext) -> Result<Self> {
        let feeds = ctx.store.load_feeds()?;
        let read_log = ctx.store.load_read_log()?;
        let saved = ctx.store.load_saved()?;
        let spinner_style = SpinnerStyle::pick(&ctx.config.spinner);

        Ok(Self {
            ctx,
            feeds,
            read_log,
            saved,
            pager: Pager::default(),
            spinner_style,
        })
    }

    /// Runs the menu loop until the user exits. Workflow errors (failed
    /// fetches, extraction failures) are reported and the loop continues;
    /// only losing stdin ends the session early.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            print_menu();
            let choice = input::prompt("\nEnter your choice (1/2/3/4): ")?;

            let outcome = match choice.as_str() {
                "1" => self.read_new().await,
                "2" => self.read_saved().await,
                "3" => self.reread().await,
                "4" => {
                    println!("\n{}", "Goodbye!".green().bold());
                    return Ok(());
                }
                _ => {
                    println!("{}", "Invalid menu choice.".red().bold());
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                println!("\n{}", e.to_string().red().bold());
            }
        }
    }

    async fn read_new(&mut self) -> Result<()> {
        let sections = self
            .ctx
            .aggregator
            .aggregate(&self.feeds, &self.read_log, &self.saved)
            .await;

        if sections.is_empty() {
            println!("\n{}", "No new articles available.".red().bold());
            return Ok(());
        }

        self.pager.present(&render::new_listing(&sections)).await?;
        let flat = aggregator::flatten(&sections);

        let choice =
            input::prompt("\nPick an article number to READ, or type 's' to SAVE for later: ")?;

        if choice.eq_ignore_ascii_case("s") {
            let which = input::prompt("Which article number to save for later? ")?;
            match input::parse_selection(&which, flat.len()) {
                Ok(index) => {
                    let article = &flat[index];
                    self.save_for_later(article)?;
                    println!(
                        "\n{}",
                        format!("[✓] Saved '{}' for later!", article.display_title())
                            .green()
                            .bold()
                    );
                }
                Err(_) => println!("{}", "Invalid selection.".red().bold()),
            }
            return Ok(());
        }

        match input::parse_selection(&choice, flat.len()) {
            Ok(index) => {
                let link = flat[index].link.clone();
                self.view_article(&link).await?;
                self.mark_read(&link)?;
                println!("\n{}", "[✓] Marked as read.".green().bold());
            }
            Err(_) => println!("{}", "Invalid selection.".red().bold()),
        }

        Ok(())
    }

    async fn read_saved(&mut self) -> Result<()> {
        if self.saved.is_empty() {
            println!("\n{}", "No saved articles available.".red().bold());
            return Ok(());
        }

        self.pager
            .present(&render::saved_listing(self.saved.links()))
            .await?;

        let choice = input::prompt("\nWhich saved article number to read? ")?;
        match input::parse_selection(&choice, self.saved.len()) {
            Ok(index) => {
                let link = self.saved.links()[index].clone();
                println!("\nFetching saved article from: {}", link.as_str().blue());

                self.view_article(&link).await?;
                self.finish_saved(index)?;
                println!(
                    "\n{}",
                    "[✓] Marked article as read and removed from saved list."
                        .green()
                        .bold()
                );
            }
            Err(_) => println!("{}", "Invalid selection.".red().bold()),
        }

        Ok(())
    }

    async fn reread(&mut self) -> Result<()> {
        if self.read_log.is_empty() {
            println!("\n{}", "No read articles available.".red().bold());
            return Ok(());
        }

        self.pager
            .present(&render::read_listing(self.read_log.iter()))
            .await?;

        let choice = input::prompt("\nWhich article number to re-read? ")?;
        match input::parse_selection(&choice, self.read_log.len()) {
            Ok(index) => {
                let Some(link) = self.read_log.get(index).map(String::from) else {
                    return Ok(());
                };
                println!("\nFetching article from: {}", link.as_str().blue());
                // Already in the read log; viewing mutates nothing.
                self.view_article(&link).await?;
            }
            Err(_) => println!("{}", "Invalid selection.".red().bold()),
        }

        Ok(())
    }

    /// Fetches, renders, and pages one article. No state is touched, so
    /// a failed fetch leaves every file exactly as it was.
    async fn view_article(&self, url: &str) -> Result<()> {
        let spinner = Spinner::start(self.spinner_style, "Downloading article...");
        let result = self.ctx.extractor.extract(url).await;
        spinner.finish().await;

        let article = result?;
        self.pager
            .present(&render::article(&article, self.ctx.config.spacing))
            .await
    }

    fn save_for_later(&mut self, article: &ArticleRef) -> Result<()> {
        self.ctx.store.append_saved(&article.link)?;
        self.saved.push(&article.link);
        Ok(())
    }

    /// Appends `url` to the read log, once ever. Re-reading or reading a
    /// URL that reached the log through another path is a no-op.
    fn mark_read(&mut self, url: &str) -> Result<()> {
        if !self.read_log.contains(url) {
            self.ctx.store.append_read(url)?;
            self.read_log.insert(url);
        }
        Ok(())
    }

    /// Completes a saved read: log the URL as read first, then drop the
    /// chosen queue entry and rewrite its file.
    fn finish_saved(&mut self, index: usize) -> Result<String> {
        let link = self.saved.links()[index].clone();
        self.mark_read(&link)?;
        self.saved.remove(index);
        self.ctx.store.rewrite_saved(self.saved.links())?;
        Ok(link)
    }
}

fn print_menu() {
    println!("\n{}", "Choose an option:".cyan().bold());
    println!("{} Read New Articles", "1.".yellow().bold());
    println!("{} Read Saved Articles", "2.".yellow().bold());
    println!("{} Re-Read Past Articles", "3.".yellow().bold());
    println!("{} Exit", "4.".yellow().bold());
}
