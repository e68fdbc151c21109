//! BPF (Berkeley Packet Filter) expressions for the discovery protocols

/// LLDP filter
/// Matches ethertype 0x88CC
pub fn lldp_filter() -> String {
    "ether proto 0x88cc".to_string()
}

/// CDP carried directly in an Ethernet II frame (ethertype 0x2000)
pub fn cdp_filter() -> String {
    "ether proto 0x2000".to_string()
}

/// CDP as Cisco devices send it: 802.3 to 01:00:0c:cc:cc:cc, SNAP protocol id 0x2000
pub fn cdp_snap_filter() -> String {
    "ether dst 01:00:0c:cc:cc:cc and ether[20:2] == 0x2000".to_string()
}

/// ARP filter
pub fn arp_filter() -> String {
    "ether proto 0x0806".to_string()
}

/// Combine multiple filters with OR logic
pub fn combine_filters_or(filters: &[&str]) -> String {
    if filters.is_empty() {
        return String::new();
    }

    filters
        .iter()
        .map(|f| format!("({})", f))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Everything netgraph decodes: LLDP, both CDP framings, ARP
pub fn discovery_filter() -> String {
    combine_filters_or(&[
        &lldp_filter(),
        &cdp_filter(),
        &cdp_snap_filter(),
        &arp_filter(),
    ])
}
