#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{ArgGroup, Parser, Subcommand};
use escala::{
    date::{format_date, parse_date},
    holiday::holidays_for_year,
    io,
    model::RosterId,
    report::{render_period, StatusRenderer, TextStatus},
    scale::{CycleOptions, ScaleCalendar},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI des escales ALFA / BRAVO
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Date d'ancrage du cycle (DD/MM/YYYY, un lundi)
    #[arg(long, global = true)]
    reference: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Statut d'une escale à une date
    Status {
        /// DD/MM/YYYY
        #[arg(long)]
        date: String,
        /// ALFA ou BRAVO
        #[arg(long)]
        roster: String,
    },

    /// Déduire l'escale à partir du statut du jour
    #[command(group(ArgGroup::new("observed").required(true).args(["off", "working"])))]
    Infer {
        /// DD/MM/YYYY
        #[arg(long)]
        date: String,
        /// La personne est de folga ce jour
        #[arg(long)]
        off: bool,
        /// La personne travaille ce jour
        #[arg(long)]
        working: bool,
    },

    /// Lister les statuts d'une période et optionnellement exporter
    Period {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        roster: String,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Prochaine folga à partir d'une date
    NextOff {
        #[arg(long)]
        date: String,
        #[arg(long)]
        roster: String,
    },

    /// Feriados nationaux d'une année
    Holidays {
        #[arg(long)]
        year: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let opts = match &cli.reference {
        Some(raw) => CycleOptions::with_reference(parse_date(raw)?),
        None => CycleOptions::default(),
    };
    if !opts.is_aligned() {
        #[cfg(feature = "logging")]
        tracing::warn!(reference = %opts.reference_date, "reference date is not a Monday");
        eprintln!(
            "Warning: reference {} is not a Monday, cycle alignment is not guaranteed",
            format_date(opts.reference_date)
        );
    }

    match cli.cmd {
        Commands::Status { date, roster } => {
            let date = parse_date(&date)?;
            let roster = parse_roster(&roster)?;
            let report = ScaleCalendar::with_options(roster, opts).status(date);
            println!("{}", TextStatus.render(&report));
        }
        Commands::Infer { date, off, .. } => {
            let date = parse_date(&date)?;
            let calendar = ScaleCalendar::infer(off, date, opts);
            #[cfg(feature = "logging")]
            tracing::debug!(%date, off, roster = %calendar.roster(), "roster inferred");
            println!("{}", calendar.roster());
        }
        Commands::Period {
            start,
            end,
            roster,
            out_json,
            out_csv,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            if end < start {
                bail!("la date de fin doit être postérieure au début");
            }
            let roster = parse_roster(&roster)?;
            let reports = ScaleCalendar::with_options(roster, opts).period(start, end);
            if let Some(path) = out_json {
                io::export_period_json(path, &reports)?;
            }
            if let Some(path) = out_csv {
                io::export_period_csv(path, &reports)?;
            }
            print!("{}", render_period(&reports, &TextStatus));
        }
        Commands::NextOff { date, roster } => {
            let date = parse_date(&date)?;
            let roster = parse_roster(&roster)?;
            let Some(next) = ScaleCalendar::with_options(roster, opts).next_day_off(date) else {
                bail!("aucune folga avant la fin du calendrier");
            };
            println!("{}", format_date(next));
        }
        Commands::Holidays { year } => {
            for h in holidays_for_year(year) {
                println!("{} | {}", format_date(h.date), h.name);
            }
        }
    }

    Ok(())
}

/// La CLI tolère `alfa` / ` Bravo ` ; la bibliothèque n'accepte que les noms exacts.
fn parse_roster(raw: &str) -> Result<RosterId> {
    Ok(raw.trim().to_ascii_uppercase().parse::<RosterId>()?)
}
