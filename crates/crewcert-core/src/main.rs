//! `crewcert` inspection binary
//!
//! Small operator tool over the built-in catalog: print the combined
//! field projection, show a resolved checklist, or walk a demo session
//! through a competency with an in-memory store.

use async_trait::async_trait;
use clap::{value_parser, Arg, ArgAction, Command};
use crewcert_core::{
    definition_complete, section_complete, section_unlocked, toggle_checkpoint, CheckpointStore,
    ChecklistError, CompetencyRegistry, PersistenceError, ScheduleDescriptor, SessionId,
    SessionRecord, TraineeRef,
};
use crewcert_model::ChecklistSection;

/// Demo store that confirms every write
struct AcceptingStore;

#[async_trait]
impl CheckpointStore for AcceptingStore {
    async fn write_field(
        &self,
        _session: SessionId,
        _field: &str,
        _value: bool,
    ) -> Result<(), PersistenceError> {
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("crewcert")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Competency checklist inspection tool")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fields")
                .about("Print the combined field projection across all competencies")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show the checklist resolved for a competency")
                .arg(
                    Arg::new("type")
                        .required(true)
                        .value_parser(value_parser!(String))
                        .help("Competency type (e.g. slicer)"),
                )
                .arg(
                    Arg::new("phase")
                        .long("phase")
                        .value_parser(value_parser!(String))
                        .help("Optional phase qualifier (e.g. basic)"),
                ),
        )
        .subcommand(
            Command::new("walkthrough")
                .about("Walk a demo session through a competency")
                .arg(
                    Arg::new("type")
                        .required(true)
                        .value_parser(value_parser!(String))
                        .help("Competency type"),
                )
                .arg(
                    Arg::new("phase")
                        .long("phase")
                        .value_parser(value_parser!(String))
                        .help("Optional phase qualifier"),
                ),
        );

    let registry = match CompetencyRegistry::with_builtins() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("catalog failed to load: {err}");
            std::process::exit(1);
        }
    };

    match cli.get_matches().subcommand() {
        Some(("fields", args)) => {
            let fields = registry.all_field_names();
            if args.get_flag("json") {
                match serde_json::to_string_pretty(&fields) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("serialization failed: {err}");
                        std::process::exit(1);
                    }
                }
            } else {
                for field in fields {
                    println!("{field}");
                }
            }
        }
        Some(("show", args)) => {
            let schedule = schedule_from_args(args);
            let definition = registry.resolve(&schedule);
            println!("competency: {}", definition.key());
            for (index, section) in definition.sections().iter().enumerate() {
                print_section(index, section, definition.gate_for(index).is_some());
            }
        }
        Some(("walkthrough", args)) => {
            let schedule = schedule_from_args(args);
            if let Err(err) = walkthrough(&registry, &schedule).await {
                eprintln!("walkthrough failed: {err}");
                std::process::exit(1);
            }
        }
        _ => unreachable!("arg_required_else_help"),
    }
}

fn schedule_from_args(args: &clap::ArgMatches) -> ScheduleDescriptor {
    let competency_type = args
        .get_one::<String>("type")
        .cloned()
        .unwrap_or_default();
    let mut schedule =
        ScheduleDescriptor::new(competency_type, TraineeRef::named("Demo Trainee"));
    if let Some(phase) = args.get_one::<String>("phase") {
        schedule = schedule.with_phase(phase.clone());
    }
    schedule
}

fn print_section(index: usize, section: &ChecklistSection, gated: bool) {
    let kind = if section.is_attested() {
        "attested"
    } else {
        "items"
    };
    let lock = if gated { " [gated]" } else { "" };
    println!("  [{index}] {} ({kind}){lock}", section.title);
    for item in &section.items {
        println!("      - {} <{}>", item.label, item.field_name);
        for sub in &item.sub_labels {
            println!("          {sub}");
        }
    }
    for prompt in &section.prompts {
        println!("      ? {prompt}");
    }
    if let Some(field) = &section.completion_field {
        println!("      = attested via <{field}>");
    }
}

async fn walkthrough(
    registry: &CompetencyRegistry,
    schedule: &ScheduleDescriptor,
) -> Result<(), ChecklistError> {
    let store = AcceptingStore;
    let definition = registry.resolve(schedule);
    let mut session = SessionRecord::new(SessionId::new(), schedule.trainee.clone());

    println!("walking `{}` as {}", definition.key(), schedule.trainee.display_name);
    for (index, section) in definition.sections().iter().enumerate() {
        let unlocked = section_unlocked(definition, index, &session);
        println!(
            "section [{index}] {} — {}",
            section.title,
            if unlocked { "unlocked" } else { "locked" }
        );
        let fields: Vec<String> = section.field_names().map(str::to_string).collect();
        for field in fields {
            toggle_checkpoint(&store, &mut session, definition, &field, true).await?;
            println!("  marked {field}");
        }
        println!(
            "  section complete: {}",
            section_complete(section, &session)
        );
    }
    println!(
        "checklist complete: {}",
        definition_complete(definition, &session)
    );
    Ok(())
}
