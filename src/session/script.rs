//! Pointer event scripts
//!
//! One event per line: `<element-id> click|move <page_x> <page_y>`.
//! Blank lines and lines starting with `#` are ignored.

use anyhow::{Context, bail};

use crate::widget::PointerEvent;

/// An event addressed to one widget element
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedEvent {
    pub element_id: String,
    pub event: PointerEvent,
}

fn parse_line(line: &str) -> anyhow::Result<ScriptedEvent> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [element_id, kind, x, y] = fields.as_slice() else {
        bail!("expected '<element-id> click|move <x> <y>', got {} fields", fields.len());
    };
    let x: f32 = x.parse().with_context(|| format!("bad x coordinate '{x}'"))?;
    let y: f32 = y.parse().with_context(|| format!("bad y coordinate '{y}'"))?;
    let event = match *kind {
        "click" => PointerEvent::Click(x, y),
        "move" => PointerEvent::Move(x, y),
        other => bail!("unknown event '{other}'"),
    };
    Ok(ScriptedEvent {
        element_id: element_id.to_string(),
        event,
    })
}

/// Parse a whole script
pub fn parse(text: &str) -> anyhow::Result<Vec<ScriptedEvent>> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| parse_line(line).with_context(|| format!("line {n}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let events = parse(
            "# warm up\n\
             tender move 170 45\n\
             \n\
             tender click 170 45\n\
             swollen  click  10.5 -3\n",
        )
        .unwrap();
        assert_eq!(
            events,
            vec![
                ScriptedEvent {
                    element_id: "tender".into(),
                    event: PointerEvent::Move(170.0, 45.0),
                },
                ScriptedEvent {
                    element_id: "tender".into(),
                    event: PointerEvent::Click(170.0, 45.0),
                },
                ScriptedEvent {
                    element_id: "swollen".into(),
                    event: PointerEvent::Click(10.5, -3.0),
                },
            ]
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse("a click 1 2\na drag 1 2\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(format!("{err:#}").contains("unknown event 'drag'"));
        assert!(parse("a click 1").is_err());
        assert!(parse("a click one 2").is_err());
    }
}
