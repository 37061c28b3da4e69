#![forbid(unsafe_code)]
use anyhow::{anyhow, bail, Result};
use corvee::{
    io::{self, CsvOptions, Quoting},
    model::{Roster, WeekdayNames},
    scheduler::{util::weekday_number, GenerateOptions, Scheduler},
    storage::{JsonStorage, Storage},
};
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de rotation de corvées (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning
    #[arg(long, global = true, env = "CORVEE_STORE", default_value = "schedule.json")]
    store: String,

    /// Nom du planning (utilisé à la création et pour le nom d'export)
    #[arg(long, global = true, default_value = "schedule")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un participant en fin de rotation
    Add {
        #[arg(long)]
        name: String,
    },

    /// Retirer un participant
    Remove {
        #[command(flatten)]
        target: Target,
    },

    /// Renommer un participant (position et identité conservées)
    Rename {
        #[command(flatten)]
        target: Target,
        /// Nouveau nom
        #[arg(long)]
        to: String,
    },

    /// Remplacer l'ordre de rotation
    Reorder {
        /// Permutation du roster courant : `--name A --name B ...` ou `--name A B ...`
        #[arg(long = "name", num_args = 1.., required = true)]
        names: Vec<String>,
    },

    /// Déplacer un participant d'une position à une autre
    Move {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },

    /// Définir la période (YYYY-MM-DD)
    Dates {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },

    /// Lister le roster
    List,

    /// Afficher le planning généré
    Show {
        /// Remplir les jours ouvrés avec "Unassigned" si le roster est vide
        #[arg(long)]
        placeholder: bool,
    },

    /// Exporter le planning
    Export {
        /// Fichier CSV (défaut : `<planning>.csv`)
        #[arg(long)]
        out: Option<String>,
        /// Export JSON des événements (optionnel)
        #[arg(long)]
        json: Option<String>,
        /// Pas de quoting des champs (format brut)
        #[arg(long)]
        raw: bool,
    },
}

/// Participant visé, par position (0 = premier) ou par nom
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Target {
    #[arg(long)]
    position: Option<usize>,
    #[arg(long)]
    name: Option<String>,
}

impl Target {
    fn resolve(&self, roster: &Roster) -> Result<usize> {
        match (self.position, &self.name) {
            (Some(position), _) => Ok(position),
            (None, Some(name)) => roster
                .position_of(name)
                .ok_or_else(|| anyhow!("unknown participant: {name}")),
            (None, None) => bail!("--position or --name is required"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.store)?;
    let mut scheduler = Scheduler::new(storage.load_or_create(&cli.schedule)?);

    let code = match cli.cmd {
        Commands::Add { name } => {
            scheduler.roster_mut().add(&name)?;
            storage.save(scheduler.document())?;
            0
        }
        Commands::Remove { target } => {
            let position = target.resolve(scheduler.roster())?;
            let removed = scheduler.roster_mut().remove(position)?;
            storage.save(scheduler.document())?;
            println!("removed {}", removed.name);
            0
        }
        Commands::Rename { target, to } => {
            let position = target.resolve(scheduler.roster())?;
            scheduler.roster_mut().rename(position, &to)?;
            storage.save(scheduler.document())?;
            0
        }
        Commands::Reorder { names } => {
            scheduler.roster_mut().reorder(&names)?;
            storage.save(scheduler.document())?;
            0
        }
        Commands::Move { from, to } => {
            scheduler.roster_mut().move_to(from, to)?;
            storage.save(scheduler.document())?;
            0
        }
        Commands::Dates { start, end } => {
            if let Err(err) = scheduler.document_mut().dates.update(&start, &end) {
                bail!("Invalid dates. Start date must be before end date. ({err})");
            }
            storage.save(scheduler.document())?;
            0
        }
        Commands::List => {
            for (pos, p) in scheduler.roster().participants.iter().enumerate() {
                println!("{pos} | {}", p.name);
            }
            0
        }
        Commands::Show { placeholder } => {
            if placeholder {
                scheduler = scheduler.with_options(GenerateOptions::with_unassigned());
            }
            let events = scheduler.events();
            let weekdays = WeekdayNames::english();
            for e in &events {
                println!(
                    "{} | {:<9} | {} | {}",
                    e.iso_date(),
                    weekdays.name(weekday_number(e.date)),
                    e.title,
                    e.color
                );
            }
            // Code 2 = planning vide (roster vide ou dates invalides)
            if events.is_empty() {
                eprintln!("empty schedule");
                2
            } else {
                0
            }
        }
        Commands::Export { out, json, raw } => {
            let events = scheduler.events();
            let opts = CsvOptions {
                quoting: if raw { Quoting::Never } else { Quoting::Necessary },
            };
            let path = out.unwrap_or_else(|| io::default_export_filename(&scheduler.document().name));
            io::export_schedule_csv(&path, &events, &WeekdayNames::english(), opts)?;
            if let Some(json_path) = json {
                io::export_events_json(json_path, &events)?;
            }
            println!("exported {} event(s) to {}", events.len(), path);
            if events.is_empty() {
                2
            } else {
                0
            }
        }
    };

    std::process::exit(code);
}
