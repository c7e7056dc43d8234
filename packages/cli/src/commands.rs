//! Command execution.
//!
//! Commands:
//! - `get <kind> <id>` - Print a static record's value
//! - `set <kind> <id> <value>` - Create or overwrite a static record
//! - `push <kind> <id> <value>` - Queue a temporary record
//! - `take <kind> <id>` - Print and remove the oldest queued record
//! - `dump [--json]` - List every record
//! - `tick [--count N]` - Run the doubling program

use serde_json::json;

use textbus_core_store::{decode_float, decode_int, Layout, RecordId};
use textbus_typed_store::{Bus, TextDevice};

use crate::{CliError, Command, TickSession, ValueKind};

/// Execute one command against `bus`, returning the text to display.
pub fn execute<D: TextDevice>(command: &Command, bus: &mut Bus<D>) -> Result<String, CliError> {
    match command {
        Command::Get { kind, id } => get(bus, *kind, &RecordId::new(id)?),
        Command::Set { kind, id, value } => {
            set(bus, *kind, &RecordId::new(id)?, value)?;
            Ok(String::new())
        }
        Command::Push { kind, id, value } => {
            push(bus, *kind, &RecordId::new(id)?, value)?;
            Ok(String::new())
        }
        Command::Take { kind, id } => take(bus, *kind, &RecordId::new(id)?),
        Command::Dump { json } => {
            let buffer = bus.snapshot()?;
            if *json {
                dump_json(bus.layout(), &buffer)
            } else {
                dump_table(bus.layout(), &buffer)
            }
        }
        Command::Tick { count } => {
            let mut session = TickSession::new();
            for _ in 0..*count {
                session.tick(bus)?;
            }
            Ok(format!("a = {}\nb = {}", session.a(), session.b()))
        }
    }
}

fn not_found(kind: ValueKind, id: &RecordId) -> CliError {
    CliError::NotFound {
        data_type: kind.into(),
        id: id.trimmed().to_string(),
    }
}

fn get<D: TextDevice>(bus: &mut Bus<D>, kind: ValueKind, id: &RecordId) -> Result<String, CliError> {
    let value = match kind {
        ValueKind::Int => bus.read_static_int(id)?.map(|v| v.to_string()),
        ValueKind::Float => bus.read_static_float(id)?.into_option().map(|v| v.to_string()),
        ValueKind::String => bus.read_static_string(id)?,
    };
    value.ok_or_else(|| not_found(kind, id))
}

fn set<D: TextDevice>(
    bus: &mut Bus<D>,
    kind: ValueKind,
    id: &RecordId,
    value: &str,
) -> Result<(), CliError> {
    match kind {
        ValueKind::Int => bus.write_static_int(id, decode_int(value)?)?,
        ValueKind::Float => bus.write_static_float(id, decode_float(value)?)?,
        ValueKind::String => bus.write_static_string(id, value)?,
    }
    Ok(())
}

fn push<D: TextDevice>(
    bus: &mut Bus<D>,
    kind: ValueKind,
    id: &RecordId,
    value: &str,
) -> Result<(), CliError> {
    match kind {
        ValueKind::Int => bus.push_temporary(id, &decode_int(value)?)?,
        ValueKind::Float => bus.push_temporary(id, &decode_float(value)?)?,
        ValueKind::String => bus.push_temporary(id, &value.to_string())?,
    }
    Ok(())
}

fn take<D: TextDevice>(bus: &mut Bus<D>, kind: ValueKind, id: &RecordId) -> Result<String, CliError> {
    let value = match kind {
        ValueKind::Int => bus.take_temporary::<i32>(id)?.map(|v| v.to_string()),
        ValueKind::Float => bus.take_temporary::<f32>(id)?.map(|v| v.to_string()),
        ValueKind::String => bus.take_temporary::<String>(id)?,
    };
    value.ok_or_else(|| not_found(kind, id))
}

fn dump_table(layout: Layout, buffer: &str) -> Result<String, CliError> {
    let mut lines = Vec::new();
    for record in layout.records(buffer) {
        let record = record?;
        lines.push(format!(
            "{:<9} {:<6} {:<16} {}",
            record.kind.to_string(),
            record.data_type.to_string(),
            record.trimmed_id(),
            record.payload
        ));
    }
    Ok(lines.join("\n"))
}

fn dump_json(layout: Layout, buffer: &str) -> Result<String, CliError> {
    let mut records = Vec::new();
    for record in layout.records(buffer) {
        let record = record?;
        records.push(json!({
            "kind": record.kind.to_string(),
            "id": record.trimmed_id(),
            "type": record.data_type.to_string(),
            "payload": record.payload,
        }));
    }
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbus_core_store::Error;
    use textbus_typed_store::InMemoryText;

    fn run(bus: &mut Bus<InMemoryText>, command: Command) -> Result<String, CliError> {
        execute(&command, bus)
    }

    fn set_cmd(kind: ValueKind, id: &str, value: &str) -> Command {
        Command::Set {
            kind,
            id: id.to_string(),
            value: value.to_string(),
        }
    }

    fn get_cmd(kind: ValueKind, id: &str) -> Command {
        Command::Get {
            kind,
            id: id.to_string(),
        }
    }

    #[test]
    fn set_then_get() {
        let mut bus = Bus::new(InMemoryText::new());

        run(&mut bus, set_cmd(ValueKind::Float, "Altitude", "100")).unwrap();
        run(&mut bus, set_cmd(ValueKind::Int, "Gear", "+3")).unwrap();

        assert_eq!(run(&mut bus, get_cmd(ValueKind::Float, "Altitude")).unwrap(), "100");
        assert_eq!(run(&mut bus, get_cmd(ValueKind::Int, "Gear")).unwrap(), "3");
    }

    #[test]
    fn get_missing_is_not_found() {
        let mut bus = Bus::new(InMemoryText::new());
        let err = run(&mut bus, get_cmd(ValueKind::String, "nope")).unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));
        assert_eq!(format!("{}", err), "no string record 'nope'");
    }

    #[test]
    fn set_rejects_unparseable_value() {
        let mut bus = Bus::new(InMemoryText::new());
        let err = run(&mut bus, set_cmd(ValueKind::Int, "n", "ten")).unwrap_err();
        assert!(matches!(err, CliError::Bus(Error::Parse { .. })));
        assert_eq!(bus.device().text(), "");
    }

    #[test]
    fn set_rejects_wide_id() {
        let mut bus = Bus::new(InMemoryText::new());
        let err = run(&mut bus, set_cmd(ValueKind::Int, "much-too-long-identifier", "1"))
            .unwrap_err();
        assert!(matches!(err, CliError::Bus(Error::IdentifierTooLong { .. })));
    }

    #[test]
    fn push_then_take() {
        let mut bus = Bus::new(InMemoryText::new());
        let push = |value: &str| Command::Push {
            kind: ValueKind::String,
            id: "Cmd.Clock".to_string(),
            value: value.to_string(),
        };
        let take = Command::Take {
            kind: ValueKind::String,
            id: "Cmd.Clock".to_string(),
        };

        run(&mut bus, push("reset")).unwrap();
        run(&mut bus, push("start")).unwrap();

        assert_eq!(run(&mut bus, take.clone()).unwrap(), "reset");
        assert_eq!(run(&mut bus, take.clone()).unwrap(), "start");
        assert!(run(&mut bus, take).is_err());
    }

    #[test]
    fn dump_lists_records() {
        let mut bus = Bus::new(InMemoryText::with_text(
            "Sa               F0.5\nTq               Igo\n",
        ));

        let table = run(&mut bus, Command::Dump { json: false }).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("static"));
        assert!(lines[0].ends_with("a                0.5"));
        assert!(lines[1].starts_with("temporary"));

        let json = run(&mut bus, Command::Dump { json: true }).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], "a");
        assert_eq!(parsed[0]["type"], "float");
        assert_eq!(parsed[1]["kind"], "temporary");
        assert_eq!(parsed[1]["payload"], "go");
    }

    #[test]
    fn dump_reports_malformed_buffer() {
        let mut bus = Bus::new(InMemoryText::with_text("garbage"));
        let err = run(&mut bus, Command::Dump { json: false }).unwrap_err();
        assert!(matches!(err, CliError::Bus(Error::Malformed { .. })));
    }

    #[test]
    fn tick_doubles_and_writes_root() {
        let mut bus = Bus::new(InMemoryText::new());
        let output = run(&mut bus, Command::Tick { count: 3 }).unwrap();
        assert_eq!(output, "a = 2\nb = 1.4142135");
    }
}
