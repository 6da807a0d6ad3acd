//! Validating resolver backed by `hickory-resolver`.
//!
//! Every connect reads the resolver configuration and the trust anchor from
//! disk and builds a new resolver with DNSSEC validation enabled. Record
//! proofs of the answer decide secure, bogus or insecure.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_proto::dnssec::TrustAnchors;
use hickory_proto::rr::{Record, RecordType};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::system_conf::parse_resolv_conf;
use hickory_resolver::TokioResolver;

use super::{NsAnswer, QueryError, ResolverConnector, SessionConfig, ValidatingResolver};
use crate::error_handling::SessionError;

/// Connector producing DNSSEC-validating hickory resolvers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryConnector;

impl HickoryConnector {
    pub fn new() -> Self {
        Self
    }
}

impl ResolverConnector for HickoryConnector {
    fn connect(
        &self,
        config: &SessionConfig,
    ) -> Result<Box<dyn ValidatingResolver>, SessionError> {
        let resolv_conf =
            std::fs::read(&config.resolv_conf).map_err(|source| SessionError::ResolvConfRead {
                path: config.resolv_conf.clone(),
                source,
            })?;
        let (resolver_config, mut opts) =
            parse_resolv_conf(&resolv_conf).map_err(|e| SessionError::ResolvConfInvalid {
                path: config.resolv_conf.clone(),
                message: e.to_string(),
            })?;
        if resolver_config.name_servers().is_empty() {
            return Err(SessionError::ResolvConfInvalid {
                path: config.resolv_conf.clone(),
                message: "no nameservers configured".to_string(),
            });
        }

        let anchors = load_trust_anchors(config)?;

        opts.validate = true;
        opts.timeout = config.timeout;
        opts.attempts = config.attempts;
        // Names are checked as given, never expanded with search domains
        opts.ndots = 0;

        let mut builder = TokioResolver::builder_with_config(
            resolver_config,
            TokioConnectionProvider::default(),
        );
        *builder.options_mut() = opts;
        let resolver = builder.with_trust_anchor(Arc::new(anchors)).build();

        Ok(Box::new(HickoryResolver { resolver }))
    }
}

fn load_trust_anchors(config: &SessionConfig) -> Result<TrustAnchors, SessionError> {
    let invalid = |message: String| SessionError::TrustAnchorInvalid {
        path: config.trust_anchor.clone(),
        message,
    };

    let text = std::fs::read_to_string(&config.trust_anchor).map_err(|source| {
        SessionError::TrustAnchorRead {
            path: config.trust_anchor.clone(),
            source,
        }
    })?;
    check_anchor_text(&text).map_err(invalid)?;

    let anchors =
        TrustAnchors::from_file(&config.trust_anchor).map_err(|e| invalid(e.to_string()))?;
    if anchors.is_empty() {
        return Err(invalid("no keys found".to_string()));
    }
    Ok(anchors)
}

/// Accepts only zone-file text made of DNSKEY or DS records whose TTL and
/// class fields are well formed; the zone file parser asserts on the rest.
fn check_anchor_text(text: &str) -> Result<(), String> {
    let mut records = 0;
    let mut open_parens = 0usize;
    for (index, raw) in text.lines().enumerate() {
        let line = raw.split(';').next().unwrap_or_default();
        let continued = open_parens > 0;
        open_parens += line.matches('(').count();
        open_parens = open_parens.saturating_sub(line.matches(')').count());
        if continued || line.trim().is_empty() || line.starts_with('$') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        // A line starting with blanks reuses the previous owner name
        let owner = usize::from(!line.starts_with(char::is_whitespace));
        let fields = &tokens[owner.min(tokens.len())..];
        let Some(type_at) = fields.iter().position(|t| *t == "DNSKEY" || *t == "DS") else {
            return Err(format!("line {} is not a DNSKEY or DS record", index + 1));
        };
        if let Some(bad) = fields[..type_at].iter().find(|t| !is_ttl_or_class(t)) {
            return Err(format!("line {}: unexpected field '{bad}'", index + 1));
        }
        records += 1;
    }

    if records == 0 {
        return Err("no DNSKEY or DS records".to_string());
    }
    Ok(())
}

fn is_ttl_or_class(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit()) || matches!(token, "IN" | "CH" | "HS")
}

struct HickoryResolver {
    resolver: TokioResolver,
}

#[async_trait]
impl ValidatingResolver for HickoryResolver {
    async fn query_ns(&self, name: &str) -> Result<NsAnswer, QueryError> {
        match self.resolver.lookup(name, RecordType::NS).await {
            Ok(lookup) => Ok(answer_for(name, lookup.records())),
            Err(e) if e.is_no_records_found() => Ok(NsAnswer::no_data()),
            Err(e) => {
                log::warn!("NS lookup failed for {name}: {e}");
                Err(QueryError::new(e.to_string()))
            }
        }
    }
}

/// Derives the answer for `name` from the proofs of its NS records.
fn answer_for(name: &str, records: &[Record]) -> NsAnswer {
    let ns_records: Vec<&Record> = records
        .iter()
        .filter(|record| record.record_type() == RecordType::NS)
        .collect();
    if ns_records.is_empty() {
        return NsAnswer::no_data();
    }

    let bogus = ns_records
        .iter()
        .filter(|record| record.proof().is_bogus())
        .count();
    if ns_records.iter().all(|record| record.proof().is_secure()) {
        NsAnswer::secure()
    } else if bogus > 0 {
        NsAnswer::bogus(format!(
            "validation failed for {bogus} of {} NS records of {name}",
            ns_records.len()
        ))
    } else {
        // Indeterminate proofs are reported as insecure, like unsigned zones
        NsAnswer::insecure()
    }
}
