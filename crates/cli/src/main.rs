use std::{error::Error, io::Write, path::PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::{Money, ParticipantSelection, equal_splits};
use serde::Serialize;
use server::types::{balance::RoomSummaryView, room::RoomSnapshot};

#[derive(Parser, Debug)]
#[command(name = "splitroom_cli")]
#[command(about = "Offline balance and settlement utilities for Splitroom rooms")]
struct Cli {
    /// Log filter (also read from `SPLITROOM_LOG`).
    #[arg(long, env = "SPLITROOM_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print balances and suggested settlements of a room snapshot.
    Settle(SettleArgs),
    /// Print the equal split of an amount.
    Split(SplitArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Csv,
}

#[derive(Args, Debug)]
struct SettleArgs {
    /// Room snapshot (JSON, same shape as the `/balances` request body).
    #[arg(long)]
    file: PathBuf,
    /// Participant id whose balance is highlighted.
    #[arg(long)]
    viewer: Option<String>,
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Args, Debug)]
struct SplitArgs {
    #[arg(long)]
    amount: Money,
    /// Participant sharing the amount (repeatable).
    #[arg(long = "participant", required = true)]
    participants: Vec<String>,
}

#[derive(Serialize)]
struct SettlementRow<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

fn write_table(out: &mut impl Write, summary: &RoomSummaryView) -> std::io::Result<()> {
    if let Some(viewer) = &summary.viewer {
        writeln!(out, "Your balance: {}", viewer.label)?;
        writeln!(out)?;
    }

    writeln!(out, "Balances")?;
    for balance in &summary.balances {
        writeln!(out, "  {:<24} {}", balance.name, balance.label)?;
    }
    writeln!(out)?;

    if summary.settled {
        writeln!(out, "All settled up!")?;
        return Ok(());
    }

    writeln!(out, "Suggested settlements")?;
    for settlement in &summary.settlements {
        let from = settlement.from_name.as_deref().unwrap_or(&settlement.from);
        let to = settlement.to_name.as_deref().unwrap_or(&settlement.to);
        writeln!(
            out,
            "  {from} → {to}  ${}",
            Money::new(settlement.amount)
        )?;
    }
    Ok(())
}

fn write_csv(out: impl Write, summary: &RoomSummaryView) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut writer = csv::Writer::from_writer(out);
    for settlement in &summary.settlements {
        writer.serialize(SettlementRow {
            from: &settlement.from,
            to: &settlement.to,
            amount: Money::new(settlement.amount).to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn settle(args: SettleArgs, out: &mut impl Write) -> Result<(), Box<dyn Error + Send + Sync>> {
    let raw = std::fs::read_to_string(&args.file)?;
    let mut snapshot: RoomSnapshot = serde_json::from_str(&raw)?;
    if args.viewer.is_some() {
        snapshot.viewer = args.viewer;
    }
    tracing::debug!(
        participants = snapshot.participants.len(),
        expenses = snapshot.expenses.len(),
        "loaded room snapshot from {}",
        args.file.display()
    );

    let summary = server::summarize_snapshot(snapshot)?;
    match args.format {
        Format::Table => write_table(out, &summary)?,
        Format::Csv => write_csv(out, &summary)?,
    }
    Ok(())
}

fn split(args: SplitArgs, out: &mut impl Write) -> Result<(), Box<dyn Error + Send + Sync>> {
    let selection = ParticipantSelection::new(args.participants)?;
    for split in equal_splits(args.amount, &selection)? {
        writeln!(out, "{}\t{}", split.participant, split.amount)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(cli.log.as_str())
        .init();

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Settle(args) => settle(args, &mut out),
        Command::Split(args) => split(args, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RoomSnapshot {
        serde_json::from_str(
            r#"{
                "participants": [
                    {"id": "p1", "name": "Alice"},
                    {"id": "p2", "name": "Bob"}
                ],
                "expenses": [{
                    "id": "e1",
                    "amount": "20.00",
                    "paid_by": "p1",
                    "splits": [
                        {"participant_id": "p1", "amount": "10.00"},
                        {"participant_id": "p2", "amount": "10.00"}
                    ]
                }],
                "viewer": "p1"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn table_lists_balances_and_settlements() {
        let summary = server::summarize_snapshot(snapshot()).unwrap();
        let mut out = Vec::new();
        write_table(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Your balance: +$10.00"));
        assert!(text.contains("Bob → Alice  $10.00"));
    }

    #[test]
    fn empty_room_is_settled() {
        let mut snapshot = snapshot();
        snapshot.expenses.clear();
        let summary = server::summarize_snapshot(snapshot).unwrap();
        let mut out = Vec::new();
        write_table(&mut out, &summary).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("All settled up!"));
    }

    #[test]
    fn csv_has_one_row_per_settlement() {
        let summary = server::summarize_snapshot(snapshot()).unwrap();
        let mut out = Vec::new();
        write_csv(&mut out, &summary).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "from,to,amount\np2,p1,10.00\n");
    }

    #[test]
    fn split_prints_each_share() {
        let args = SplitArgs {
            amount: "10".parse().unwrap(),
            participants: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        };
        let mut out = Vec::new();
        split(args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\t3.33\nb\t3.33\nc\t3.33\n");
    }
}
