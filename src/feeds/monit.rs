//! Normalizer for the Monit XML status feed.
//!
//! Monit reports each service as
//! `<service><name/><status/><monitor/></service>` where `status` and
//! `monitor` are numeric strings. A non-zero `status` means the service
//! failed its checks; a `monitor` value other than `1` means Monit is
//! not actively watching it. The two axes are independent.

use serde::Deserialize;
use tracing::debug;

use crate::{Item, ItemKind};

#[derive(Debug, Deserialize)]
struct MonitStatus {
    #[serde(default, rename = "service")]
    services: Vec<MonitService>,
}

#[derive(Debug, Deserialize)]
struct MonitService {
    #[serde(default)]
    name: String,
    status: Option<String>,
    monitor: Option<String>,
}

/// Absent or unparsable numeric fields read as 0, per Monit convention.
fn numeric(field: Option<&str>) -> i64 {
    field.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0)
}

pub fn normalize(body: &str) -> Vec<Item> {
    let status: MonitStatus = match quick_xml::de::from_str(body) {
        Ok(status) => status,
        Err(e) => {
            debug!("monit feed did not parse, treating as empty: {e}");
            return vec![];
        }
    };

    status
        .services
        .into_iter()
        .filter(|service| !service.name.is_empty())
        .map(|service| Item {
            failed: numeric(service.status.as_deref()) != 0,
            not_monitored: numeric(service.monitor.as_deref()) != 1,
            name: service.name,
            kind: ItemKind::Service,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_healthy_service() {
        let xml = r#"
<monit>
  <service>
    <name>system</name>
    <status>0</status>
    <monitor>1</monitor>
  </service>
</monit>"#;

        let items = normalize(xml);

        assert_eq!(
            items,
            vec![Item {
                name: "system".to_string(),
                kind: ItemKind::Service,
                failed: false,
                not_monitored: false,
            }]
        );
    }

    #[test]
    fn test_failed_and_unmonitored_are_independent() {
        let xml = r#"
<monit>
  <service><name>s1</name><status>0</status><monitor>1</monitor></service>
  <service><name>s2</name><status>1</status><monitor>0</monitor></service>
  <service><name>s3</name><status>1</status><monitor>1</monitor></service>
  <service><name>s4</name><status>0</status><monitor>0</monitor></service>
</monit>"#;

        let items = normalize(xml);

        assert_eq!(items.len(), 4);
        assert!(items[0].healthy());
        assert!(items[1].failed && items[1].not_monitored);
        assert!(items[2].failed && !items[2].not_monitored);
        assert!(!items[3].failed && items[3].not_monitored);
    }

    #[test]
    fn test_negative_monitor_value_reads_as_not_monitored() {
        let xml = r#"
<monit>
  <service><name>system</name><status>0</status><monitor>-1</monitor></service>
</monit>"#;

        let items = normalize(xml);

        assert!(!items[0].failed);
        assert!(items[0].not_monitored);
    }

    #[test]
    fn test_absent_fields_default_to_zero() {
        // status absent -> 0 -> ok; monitor absent -> 0 -> not monitored
        let xml = "<monit><service><name>bare</name></service></monit>";

        let items = normalize(xml);

        assert!(!items[0].failed);
        assert!(items[0].not_monitored);
    }

    #[test]
    fn test_unparsable_status_defaults_to_zero() {
        let xml = r#"
<monit>
  <service><name>odd</name><status>garbage</status><monitor>1</monitor></service>
</monit>"#;

        let items = normalize(xml);

        assert!(!items[0].failed);
    }

    #[test]
    fn test_nameless_services_are_dropped() {
        let xml = "<monit><service><status>1</status></service></monit>";

        assert!(normalize(xml).is_empty());
    }

    #[test]
    fn test_malformed_body_yields_no_items() {
        assert!(normalize("not xml at all").is_empty());
        assert!(normalize("").is_empty());
        assert!(normalize("<wrong><thing/></wrong>").is_empty());
    }
}
