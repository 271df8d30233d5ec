
pub mod command;
pub mod parser;

use std::io::{BufRead, Write};

use chrono::Local;
use color_print::cformat;
use tracing::debug;

use crate::display::write_inventory;
use crate::error::{parse_id, Result};
use crate::inventory::{CdRecord, Inventory};
use crate::persistence::LoadReport;
use command::{choice_prompt, menu, Command};

/// What the shell needs from whoever owns the inventory.
pub trait Host {
    fn reload(&mut self) -> Result<LoadReport>;
    fn add(&mut self, id_text: &str, title: &str, artist: &str) -> Result<CdRecord>;
    fn delete(&mut self, id: i64) -> Option<CdRecord>;
    fn save(&mut self) -> Result<usize>;
    fn inventory(&self) -> &Inventory;
}

pub struct Shell<'a, T, R, W> where T: Host, R: BufRead, W: Write {
    host: &'a mut T,
    input: R,
    output: W,
}

impl<'a, T, R, W> Shell<'a, T, R, W> where T: Host, R: BufRead, W: Write {
    pub fn new(host_: &'a mut T, input_: R, output_: W) -> Self {
        Self {
            host: host_,
            input: input_,
            output: output_,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.main_loop()
    }

    /// Prints `prompt` and reads one line. `None` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = vec![];
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn ask_or_empty(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }

    fn show_inventory(&mut self) -> Result<()> {
        write_inventory(&mut self.output, self.host.inventory())
    }

    fn menu_choice(&mut self) -> Result<Command> {
        loop {
            let Some(answer) = self.ask(&choice_prompt())? else {
                debug!("input closed, leaving the menu");
                writeln!(self.output)?;
                return Ok(Command::Exit);
            };
            match parser::parse(&answer) {
                Ok(command) => {
                    writeln!(self.output)?;
                    return Ok(command);
                }
                Err(e) => debug!("rejected menu input: {:?}", e),
            }
        }
    }

    pub fn main_loop(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", menu())?;
            match self.menu_choice()? {
                Command::Exit => return Ok(()),
                Command::Load => self.reload()?,
                Command::Add => self.add()?,
                Command::Display => self.show_inventory()?,
                Command::Delete => self.delete()?,
                Command::Save => self.save()?,
            }
        }
    }

    fn reload(&mut self) -> Result<()> {
        writeln!(self.output, "{}", cformat!("<yellow>WARNING:</yellow> If you continue, all unsaved data will be lost and the Inventory re-loaded from file."))?;
        let answer = self.ask_or_empty("type 'yes' to continue and reload from file. otherwise reload will be canceled \n")?;
        if answer.to_lowercase() == "yes" {
            writeln!(self.output, "reloading...")?;
            let report = self.host.reload()?;
            writeln!(self.output, "{}", report)?;
        } else {
            self.ask_or_empty("canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.")?;
        }
        self.show_inventory()
    }

    fn add(&mut self) -> Result<()> {
        let id = self.ask_or_empty("Enter ID: ")?;
        let title = self.ask_or_empty("What is the CD's title? ")?;
        let artist = self.ask_or_empty("What is the Artist's name? ")?;

        if let Err(e) = self.host.add(&id, &title, &artist) {
            writeln!(self.output, "{}", cformat!("<red>Error:</red> {}", e))?;
        }
        self.show_inventory()
    }

    fn delete(&mut self) -> Result<()> {
        self.show_inventory()?;
        let answer = self.ask_or_empty("Which ID would you like to delete? ")?;
        let id = match parse_id(&answer) {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "{}", cformat!("<red>Error:</red> {}", e))?;
                return Ok(());
            }
        };

        match self.host.delete(id) {
            Some(_) => writeln!(self.output, "{}", cformat!("<green>The CD was removed</green>"))?,
            None => writeln!(self.output, "{}", cformat!("<yellow>Could not find this CD!</yellow>"))?,
        }
        self.show_inventory()
    }

    fn save(&mut self) -> Result<()> {
        self.show_inventory()?;
        let answer = self.ask_or_empty("Save this inventory to file? [y/n] ")?;
        if answer.to_lowercase() == "y" {
            let written = self.host.save()?;
            let now = Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(self.output, "{}", cformat!("<green>Saved {} CD(s)</green> at {}", written, now))?;
        } else {
            self.ask_or_empty("The inventory was NOT saved to file. Press [ENTER] to return to the menu.")?;
        }
        Ok(())
    }
}
