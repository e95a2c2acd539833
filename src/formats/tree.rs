// Indented text rendering of packet trees

use crate::packet::Packet;

/// Render a packet tree one packet per line, children indented under
/// their operator
pub fn render_tree(packet: &Packet) -> String {
    let mut output = String::new();
    render_into(packet, 0, &mut output);
    output
}

fn render_into(packet: &Packet, level: usize, output: &mut String) {
    output.push_str(&"  ".repeat(level));

    match packet {
        Packet::Literal { version, value } => {
            output.push_str(&format!("v{} literal {}\n", version, value));
        }
        Packet::Operator {
            version,
            op,
            children,
        } => {
            output.push_str(&format!("v{} {} ({} children)\n", version, op, children.len()));
            for child in children {
                render_into(child, level + 1, output);
            }
        }
    }
}
