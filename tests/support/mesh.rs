//! Mesh document builders.

use serde_json::{json, Value};

/// Build a mesh document from `(element, height)` values and
/// `(element, nodes)` connectivity.
pub fn document(values: &[(i64, f64)], elements: &[(i64, &[i64])]) -> String {
    let mut node_ids: Vec<i64> = elements
        .iter()
        .flat_map(|(_, nodes)| nodes.iter().copied())
        .collect();
    node_ids.sort_unstable();
    node_ids.dedup();

    let nodes: Vec<Value> = node_ids
        .iter()
        .map(|id| json!({ "id": id, "x": *id as f64, "y": 0.0 }))
        .collect();
    let elements: Vec<Value> = elements
        .iter()
        .map(|(id, nodes)| json!({ "id": id, "nodes": nodes }))
        .collect();
    let values: Vec<Value> = values
        .iter()
        .map(|(id, value)| json!({ "element_id": id, "value": value }))
        .collect();

    json!({ "nodes": nodes, "elements": elements, "values": values }).to_string()
}

/// Row of five elements with heights 5 1 2 1 4; summits are 1, 5 and 3.
pub fn valley_row() -> String {
    document(
        &[(1, 5.0), (2, 1.0), (3, 2.0), (4, 1.0), (5, 4.0)],
        &[
            (1, &[1, 2]),
            (2, &[2, 3]),
            (3, &[3, 4]),
            (4, &[4, 5]),
            (5, &[5, 6]),
        ],
    )
}

/// Four elements of equal height around one shared node.
pub fn same_height_neighbors() -> String {
    document(
        &[(1, 2.0), (2, 2.0), (3, 2.0), (4, 2.0)],
        &[(1, &[0, 1]), (2, &[0, 2]), (3, &[0, 3]), (4, &[0, 4])],
    )
}

/// Quad grid of `nx` by `ny` cells with a wavy height field.
///
/// Returns the document and, per element id, the ids of the elements that
/// share a corner with it.
pub fn wavy_grid(nx: i64, ny: i64) -> (String, Vec<Vec<i64>>) {
    let node = |x: i64, y: i64| y * (nx + 1) + x;

    let mut values = Vec::new();
    let mut elements = Vec::new();
    let mut neighbors = Vec::new();
    for y in 0..ny {
        for x in 0..nx {
            let id = y * nx + x;
            let height = (x as f64 * 0.7).sin() * (y as f64 * 0.5).cos() + id as f64 * 1e-9;
            values.push(json!({ "element_id": id, "value": height }));
            elements.push(json!({
                "id": id,
                "nodes": [node(x, y), node(x + 1, y), node(x + 1, y + 1), node(x, y + 1)],
            }));

            let mut around = Vec::new();
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (cx, cy) = (x + dx, y + dy);
                    if (dx, dy) != (0, 0) && cx >= 0 && cy >= 0 && cx < nx && cy < ny {
                        around.push(cy * nx + cx);
                    }
                }
            }
            neighbors.push(around);
        }
    }

    let doc = json!({ "elements": elements, "values": values }).to_string();
    (doc, neighbors)
}

/// Parse the binary's JSON output into `(element_id, value)` pairs.
pub fn parse_output(stdout: &[u8]) -> Vec<(i64, f64)> {
    let parsed: Vec<Value> = serde_json::from_slice(stdout).expect("JSON output");
    parsed
        .iter()
        .map(|entry| {
            (
                entry["element_id"].as_i64().expect("element_id"),
                entry["value"].as_f64().expect("value"),
            )
        })
        .collect()
}
