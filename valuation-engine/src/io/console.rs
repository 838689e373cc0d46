//! Line-oriented front end over a [`Session`] and the watchlist.

use crate::error::EngineError;
use crate::session::Session;
use anyhow::Result;
use clap::{Parser, Subcommand};
use reel::{Catalog, InstrumentId, Notification, SeriesGenerator};
use reel_core::model::{StaticCatalog, WatchlistStore};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Parser, Debug)]
#[command(name = "", no_binary_name = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the watchlist
    List,
    /// Show the best performing watchlist entries
    Top {
        #[arg(default_value_t = 3)]
        count: usize,
    },
    /// Show catalog titles and base prices
    Catalog,
    /// Add a catalog title to the watchlist
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Remove a watchlist entry by id
    Remove { id: InstrumentId },
    /// Select a watchlist entry to trade
    Select { id: InstrumentId },
    /// Set the allocation percentage (0-100)
    Alloc {
        #[arg(allow_negative_numbers = true)]
        percent: f64,
    },
    /// Buy the selected movie at the current allocation
    Buy,
    /// Sell the selected movie at the current allocation
    Sell,
    /// Show portfolio value, change and sector distribution
    Portfolio,
    /// Show the selected movie
    Show,
    /// Leave the session
    Quit,
}

pub struct Console<G: SeriesGenerator> {
    session: Session,
    store: WatchlistStore,
    catalog: StaticCatalog,
    generator: G,
}

impl<G: SeriesGenerator> Console<G> {
    pub fn new(session: Session, store: WatchlistStore, catalog: StaticCatalog, generator: G) -> Self {
        Self {
            session,
            store,
            catalog,
            generator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &WatchlistStore {
        &self.store
    }

    pub fn has_pending_alert(&self) -> bool {
        self.session.has_pending_alert()
    }

    pub async fn next_alert(&mut self) -> Option<Notification> {
        self.session.next_alert().await
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    pub fn banner(&self, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "Movie portfolio: {} watchlist entries. Type 'help' for commands.",
            self.store.len()
        )?;
        Ok(())
    }

    /// Parses and runs one input line. Parse errors are printed, not returned.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        match ConsoleLine::try_parse_from(words) {
            Ok(parsed) => self.handle(parsed.command, out),
            Err(e) => {
                write!(out, "{}", e.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::List => {
                for entry in self.store.entries() {
                    writeln!(
                        out,
                        "{:>14}  {:<28} ₹{:>7.2}  {:>+6.2}%  {:<14} {}",
                        entry.id,
                        entry.title,
                        entry.price,
                        entry.change,
                        entry.genre,
                        entry.release_date
                    )?;
                }
            }
            Command::Top { count } => {
                for (rank, entry) in self.store.top_movers(count).iter().enumerate() {
                    writeln!(out, "{}. {} {:+.2}%", rank + 1, entry.title, entry.change)?;
                }
            }
            Command::Catalog => {
                for title in self.catalog.titles() {
                    let price = self.catalog.lookup(title).unwrap_or_default();
                    writeln!(out, "{:<28} ₹{:.2}", title, price)?;
                }
            }
            Command::Add { title } => {
                let title = title.join(" ");
                match self.catalog.price_of(&title) {
                    Ok(price) => {
                        let entry = self.store.add(&title, price)?;
                        writeln!(out, "Added '{}' as {}", entry.title, entry.id)?;
                    }
                    Err(_) => self.reject(EngineError::UnknownInstrument(title), out)?,
                }
            }
            Command::Remove { id } => match self.store.remove(id)? {
                Some(entry) => writeln!(out, "Removed '{}'", entry.title)?,
                None => self.reject(EngineError::EntryNotFound(id), out)?,
            },
            Command::Select { id } => match self.store.get(id).cloned() {
                Some(entry) => {
                    self.session.select(&entry, &mut self.generator);
                    self.show(out)?;
                }
                None => self.reject(EngineError::EntryNotFound(id), out)?,
            },
            Command::Alloc { percent } => match self.session.set_allocation(percent) {
                Ok(()) => writeln!(out, "Allocation set to {}%", percent)?,
                Err(e) => self.reject(e, out)?,
            },
            Command::Buy => {
                let _ = self.session.buy();
                self.print_notification(out)?;
            }
            Command::Sell => {
                let _ = self.session.sell();
                self.print_notification(out)?;
            }
            Command::Portfolio => self.print_portfolio(out)?,
            Command::Show => self.show(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn reject(&mut self, error: EngineError, out: &mut impl Write) -> Result<()> {
        self.session.notify(Notification::rejected(&error));
        self.print_notification(out)
    }

    fn print_notification(&self, out: &mut impl Write) -> Result<()> {
        if let Some(n) = self.session.notification() {
            writeln!(out, "[{}] {}", n.title, n.description)?;
        }
        Ok(())
    }

    fn print_portfolio(&self, out: &mut impl Write) -> Result<()> {
        let p = self.session.portfolio();
        writeln!(out, "Total value: ₹{:.2}", p.total_value())?;
        writeln!(
            out,
            "Change:      ₹{:+.2} ({:+.2}%)",
            p.cumulative_change(),
            p.change_percent()
        )?;
        for (name, share) in p.distribution().shares() {
            writeln!(out, "  {:<20} {:>3.0}%", name, share)?;
        }
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        let Some(instrument) = self.session.selected() else {
            writeln!(out, "Nothing selected")?;
            return Ok(());
        };
        writeln!(
            out,
            "{}  ₹{:.2}  {:+.2}%  (allocation {}%)",
            instrument.title(),
            instrument.price(),
            instrument.percent_change(),
            self.session.allocation()
        )?;
        let profile = instrument.profile();
        writeln!(
            out,
            "Director: {}  Cast: {}  Budget: ₹{:.0}",
            profile.director,
            profile.cast.join(", "),
            profile.budget
        )?;
        let history = instrument.history();
        if let Some((low, high)) = history.price_range() {
            writeln!(
                out,
                "{} days: low ₹{:.2}, high ₹{:.2}, volume {:.0}",
                history.len(),
                low,
                high,
                history.total_volume()
            )?;
        }
        Ok(())
    }
}
