//! Output formatter: human summary and the JSON edge list

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use netgraph_capture::Discovery;
use netgraph_core::{Edge, Error, NeighborInfo, Result};
use tracing::warn;

/// Shape of the edge document
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One compact JSON object per line
    Jsonl,
}

/// Serialize edges in the requested format
///
/// An empty edge list renders as `[]` in array form and as nothing in
/// line-delimited form.
pub fn render_edges(edges: &[Edge], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(edges)?),
        OutputFormat::Jsonl => {
            let mut out = String::new();
            for edge in edges {
                out.push_str(&serde_json::to_string(edge)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

/// Neighbor sightings followed by the LLDP edges, self-loops left out
pub fn render_summary(neighbors: &[(String, NeighborInfo)], edges: &[Edge]) -> String {
    let mut out = String::new();

    out.push_str("\nDiscovered Neighbors (ARP & CDP):\n");
    for (key, info) in neighbors {
        let _ = writeln!(
            out,
            "  Key: {}, Interface: {}, SrcMAC: {}, Protocol: {}, Details: {}",
            key, info.interface_name, info.source_mac, info.protocol, info.details
        );
    }
    out.push('\n');

    out.push_str("Discovered LLDP Edges:\n");
    for edge in edges.iter().filter(|edge| !edge.is_self_loop()) {
        let _ = writeln!(
            out,
            "  ({}, {}) -> ({}, {})",
            edge.local.device, edge.local.interface, edge.remote.device, edge.remote.interface
        );
    }
    out.push('\n');

    out
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::Output {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Print the summary and deliver the edge document
///
/// With a path the document goes to that file; if the write fails the failure
/// is logged and the document is printed to `out` instead.
pub fn emit<W: Write>(
    out: &mut W,
    discovery: &Discovery,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    out.write_all(render_summary(&discovery.neighbors, &discovery.edges).as_bytes())?;

    let mut document = render_edges(&discovery.edges, format)?;
    if !document.ends_with('\n') {
        document.push('\n');
    }

    if let Some(path) = path {
        match write_file(path, &document) {
            Ok(()) => {
                writeln!(out, "Wrote LLDP edges JSON to {}", path.display())?;
                return Ok(());
            }
            Err(e) => warn!("{}", e),
        }
    }

    writeln!(out, "LLDP Edges in JSON:")?;
    out.write_all(document.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use netgraph_core::{MacAddr, NeighborProtocol, Node};

    fn edge(local: &str, remote: &str) -> Edge {
        Edge::new(
            Node::new(local, "eth0").with_mac(Some(MacAddr::new([2, 0, 0, 0, 0, 1]))),
            Node::new(remote, "Gi0/1"),
        )
    }

    fn discovery(edges: Vec<Edge>) -> Discovery {
        let sighting = NeighborInfo::new(
            "eth0",
            "00:1e:f7:00:00:01",
            NeighborProtocol::Cdp,
            "CDP payload length: 42 bytes",
        );
        Discovery {
            edges,
            neighbors: vec![(sighting.key(), sighting)],
            reports: Vec::new(),
        }
    }

    fn emit_to_string(discovery: &Discovery, format: OutputFormat, path: Option<&Path>) -> String {
        let mut out = Vec::new();
        emit(&mut out, discovery, format, path).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(render_edges(&[], OutputFormat::Json).unwrap(), "[]");
        assert_eq!(render_edges(&[], OutputFormat::Jsonl).unwrap(), "");
    }

    #[test]
    fn test_pretty_json_shape() {
        let json = render_edges(&[edge("host1", "core1")], OutputFormat::Json).unwrap();
        let expected = r#"[
  {
    "local": {
      "device": "host1",
      "interface": "eth0",
      "mac": "02:00:00:00:00:01"
    },
    "remote": {
      "device": "core1",
      "interface": "Gi0/1"
    }
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_jsonl_lines() {
        let edges = vec![edge("host1", "core1"), edge("host1", "core2")];
        let jsonl = render_edges(&edges, OutputFormat::Jsonl).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        let parsed: Edge = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed, edges[1]);
    }

    #[test]
    fn test_summary_skips_self_loops() {
        let d = discovery(vec![edge("host1", "core1"), edge("host1", "host1")]);
        let summary = render_summary(&d.neighbors, &d.edges);

        assert!(summary.contains(
            "  Key: eth0-CDP-00:1e:f7:00:00:01, Interface: eth0, SrcMAC: 00:1e:f7:00:00:01, \
             Protocol: CDP, Details: CDP payload length: 42 bytes\n"
        ));
        assert!(summary.contains("  (host1, eth0) -> (core1, Gi0/1)\n"));
        assert!(!summary.contains("-> (host1, Gi0/1)"));
    }

    #[test]
    fn test_emit_to_stdout() {
        let d = discovery(vec![edge("host1", "core1")]);
        let out = emit_to_string(&d, OutputFormat::Json, None);

        let (summary, json) = out.split_once("LLDP Edges in JSON:\n").unwrap();
        assert!(summary.starts_with("\nDiscovered Neighbors (ARP & CDP):\n"));
        let parsed: Vec<Edge> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, d.edges);
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.json");
        let d = discovery(vec![edge("host1", "core1")]);

        let out = emit_to_string(&d, OutputFormat::Json, Some(&path));
        assert!(out.ends_with(&format!("Wrote LLDP edges JSON to {}\n", path.display())));
        assert!(!out.contains("LLDP Edges in JSON:"));

        let written: Vec<Edge> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, d.edges);
    }

    #[test]
    fn test_emit_empty_file_is_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.json");

        emit_to_string(&discovery(Vec::new()), OutputFormat::Json, Some(&path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }

    #[test]
    fn test_file_failure_falls_back_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("edges.json");
        let d = discovery(vec![edge("host1", "core1")]);

        let out = emit_to_string(&d, OutputFormat::Json, Some(&path));
        assert!(!out.contains("Wrote LLDP edges JSON"));
        let (_, json) = out.split_once("LLDP Edges in JSON:\n").unwrap();
        let parsed: Vec<Edge> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 1);
    }
}
