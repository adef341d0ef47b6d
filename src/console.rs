// ABOUTME: Interactive console for the deck-viewer application
// ABOUTME: Line-oriented UI that stages files, picks templates and pages through decks

use crate::api::SlideApi;
use crate::app::App;
use crate::errors::Result;
use crate::html::{self, HtmlOptions};
use crate::server::SharedPage;
use crate::staging;
use crate::text::render_navigator_text;
use log::warn;
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
Commands:
  templates            list templates offered by the service
  use <id>             select a template
  add <path|glob>...   stage data files (.csv, .xlsx, .xls, .pdf)
  remove <n>           unstage file number n
  files                list staged files
  upload               generate a deck from the staged files
  sample               generate a deck from sample data
  next | n             next slide
  prev | p             previous slide
  show                 show the current slide again
  export <file>        write the current deck as an HTML page
  help                 show this help
  quit | q             leave
";

pub struct Console<A: SlideApi> {
    app: App<A>,
    html_options: HtmlOptions,
    page: Option<SharedPage>,
}

impl<A: SlideApi> Console<A> {
    pub fn new(app: App<A>, html_options: HtmlOptions) -> Self {
        Self {
            app,
            html_options,
            page: None,
        }
    }

    /// Keep `page` in sync with the current deck, for the preview server.
    pub fn with_page(mut self, page: SharedPage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn app(&self) -> &App<A> {
        &self.app
    }

    /// Read commands until `quit` or end of input. Request failures are
    /// reported and the loop keeps going.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.app.mount();
        match self.app.selected_template() {
            Some(id) => writeln!(out, "Template: {}", id)?,
            None => writeln!(out, "No templates available; choose one with `use <id>`")?,
        }
        writeln!(out, "Type `help` for commands.")?;

        for line in input.lines() {
            let line = line?;
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let args: Vec<&str> = words.collect();

            if matches!(command, "quit" | "q" | "exit") {
                break;
            }
            self.dispatch(command, &args, out)?;
            out.flush()?;
        }
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: &str, args: &[&str], out: &mut W) -> Result<()> {
        match command {
            "help" | "?" => write!(out, "{}", HELP)?,
            "templates" => {
                if self.app.templates().is_empty() {
                    writeln!(out, "No templates available.")?;
                }
                for id in self.app.templates() {
                    let marker = if Some(id.as_str()) == self.app.selected_template() {
                        "*"
                    } else {
                        " "
                    };
                    writeln!(out, "{} {}", marker, id)?;
                }
            }
            "use" => match args.first() {
                Some(id) => {
                    self.app.select_template(id);
                    writeln!(out, "Template: {}", id)?;
                }
                None => writeln!(out, "Usage: use <template id>")?,
            },
            "add" => {
                for pattern in args {
                    match staging::expand_pattern(pattern) {
                        Ok(files) => self.app.add_files(files),
                        Err(e) => writeln!(out, "{}", e)?,
                    }
                }
                self.print_files(out)?;
            }
            "remove" => match args.first().and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n >= 1 => {
                    match self.app.remove_file(n - 1) {
                        Some(file) => writeln!(out, "Removed {}", file.name)?,
                        None => writeln!(out, "No staged file number {}", n)?,
                    }
                    self.print_files(out)?;
                }
                _ => writeln!(out, "Usage: remove <file number>")?,
            },
            "files" => self.print_files(out)?,
            "upload" => {
                writeln!(out, "Processing...")?;
                self.app.upload();
                self.after_request(out)?;
            }
            "sample" => {
                writeln!(out, "Loading sample data...")?;
                self.app.load_sample();
                self.after_request(out)?;
            }
            "next" | "n" => {
                if let Some(nav) = self.app.navigator_mut() {
                    nav.next();
                }
                self.print_current(out)?;
            }
            "prev" | "p" => {
                if let Some(nav) = self.app.navigator_mut() {
                    nav.previous();
                }
                self.print_current(out)?;
            }
            "show" => self.print_current(out)?,
            "export" => match (args.first(), self.app.deck()) {
                (Some(path), Some(deck)) => {
                    let page = html::generate_html(deck, &self.html_options)?;
                    html::write_html_to_file(&page, Path::new(path))?;
                    writeln!(out, "Wrote {}", path)?;
                }
                (None, _) => writeln!(out, "Usage: export <file>")?,
                (_, None) => writeln!(out, "No slides to export.")?,
            },
            other => writeln!(out, "Unknown command '{}'. Type `help`.", other)?,
        }
        Ok(())
    }

    fn print_files<W: Write>(&self, out: &mut W) -> Result<()> {
        let files = self.app.staged_files();
        if files.is_empty() {
            writeln!(out, "No files staged.")?;
        }
        for (i, file) in files.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, file.name)?;
        }
        Ok(())
    }

    fn print_current<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.app.navigator() {
            Some(nav) => write!(out, "{}", render_navigator_text(&nav.view()))?,
            None => writeln!(out, "No slides to display.")?,
        }
        Ok(())
    }

    fn after_request<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some(message) = self.app.error() {
            writeln!(out, "Error: {}", message)?;
            return Ok(());
        }
        if let (Some(page), Some(deck)) = (&self.page, self.app.deck()) {
            match html::generate_html(deck, &self.html_options) {
                Ok(html) => page.replace(html),
                Err(e) => warn!("Failed to refresh preview page: {}", e),
            }
        }
        self.print_current(out)
    }
}
