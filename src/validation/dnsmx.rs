use serde::Deserialize;
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::error::ProtoErrorKind,
    system_conf::read_system_conf,
};

/// What DNS told us about a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsAnswer {
    /// The query succeeded with this many records.
    Records(usize),
    /// NXDOMAIN or an empty answer.
    NotFound,
    /// The resolver was reachable but did not answer in time.
    Timeout,
    /// No resolver could be reached or configured.
    Unreachable,
}

/// Which record types count as evidence that a domain accepts mail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Only MX records.
    #[default]
    Mx,
    /// MX records, falling back to A/AAAA when there are none (RFC 5321 implicit MX).
    MxOrAddress,
}

/// Lookup seam between the validator and the network.
#[cfg_attr(test, mockall::automock)]
pub trait DomainResolver: Send + Sync {
    /// Answer for `domain` under `policy`, fallback included.
    fn answer(&self, domain: &str, policy: RecordPolicy) -> DnsAnswer;
}

/// One query per record type against a single resolver.
#[cfg_attr(test, mockall::automock)]
pub trait RecordLookup {
    fn mx_records(&self, domain: &str) -> DnsAnswer;
    fn address_records(&self, domain: &str) -> DnsAnswer;
}

/// Runs the queries `policy` calls for, in order.
pub fn answer_with(lookup: &dyn RecordLookup, domain: &str, policy: RecordPolicy) -> DnsAnswer {
    match policy {
        RecordPolicy::Mx => lookup.mx_records(domain),
        RecordPolicy::MxOrAddress => match lookup.mx_records(domain) {
            DnsAnswer::Records(0) | DnsAnswer::NotFound => lookup.address_records(domain),
            answer => answer,
        },
    }
}

/// Maps a DNS answer to pass/fail.
///
/// | answer          | routable |
/// |-----------------|----------|
/// | `Records(n>0)`  | yes      |
/// | `Records(0)`    | no       |
/// | `NotFound`      | no       |
/// | `Timeout`       | no       |
/// | `Unreachable`   | yes      |
pub fn routable(answer: DnsAnswer) -> bool {
    match answer {
        DnsAnswer::Records(count) => count > 0,
        DnsAnswer::NotFound | DnsAnswer::Timeout => false,
        DnsAnswer::Unreachable => true,
    }
}

/// Checks whether `domain` publishes records that make it a mail destination.
pub fn is_routable(resolver: &dyn DomainResolver, domain: &str, policy: RecordPolicy) -> bool {
    let answer = resolver.answer(domain, policy);

    if answer == DnsAnswer::Unreachable {
        warn!(domain, "DNS unavailable, treating domain as routable");
    } else {
        debug!(domain, ?answer, ?policy, "DNS routability answer");
    }
    routable(answer)
}

/// Resolver backed by the operating system's DNS configuration, or by an
/// explicit [`ResolverConfig`].
///
/// Every [`answer`](DomainResolver::answer) builds one resolver on a dedicated
/// thread and shares it between the MX and A/AAAA queries, so no answer
/// outlives the call and the lookup is safe to start from inside an async
/// runtime. The whole call returns within `timeout`.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    config: Option<ResolverConfig>,
    timeout: Duration,
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self {
            config: None,
            timeout,
        }
    }

    /// Uses `config` instead of the system configuration.
    pub fn with_config(config: ResolverConfig, timeout: Duration) -> Self {
        Self {
            config: Some(config),
            timeout,
        }
    }

    /// Creates a DNS resolver
    ///
    /// Configures resolver with:
    /// - half the call budget per request, leaving the other half for the TCP retry
    /// - TCP retry when UDP fails, so a refused nameserver is reported as such
    /// - no retries beyond that
    fn resolver(config: Option<ResolverConfig>, timeout: Duration) -> Option<Resolver> {
        let (config, mut opts) = match config {
            Some(config) => (config, ResolverOpts::default()),
            None => match read_system_conf() {
                Ok(conf) => conf,
                Err(err) => {
                    debug!(error = %err, "no system resolver configuration");
                    return None;
                }
            },
        };
        opts.timeout = timeout / 2;
        opts.attempts = 0;
        opts.try_tcp_on_error = true;

        Resolver::new(config, opts).ok()
    }
}

impl DomainResolver for SystemResolver {
    fn answer(&self, domain: &str, policy: RecordPolicy) -> DnsAnswer {
        let (sender, receiver) = mpsc::channel();
        let config = self.config.clone();
        let timeout = self.timeout;
        let name = fqdn(domain);

        let spawned = thread::Builder::new()
            .name("dns-lookup".to_string())
            .spawn(move || {
                let answer = match Self::resolver(config, timeout) {
                    Some(resolver) => answer_with(&resolver, &name, policy),
                    None => DnsAnswer::Unreachable,
                };
                let _ = sender.send(answer);
            });
        if let Err(err) = spawned {
            warn!(error = %err, "could not start DNS lookup thread");
            return DnsAnswer::Unreachable;
        }

        match receiver.recv_timeout(timeout) {
            Ok(answer) => answer,
            Err(RecvTimeoutError::Timeout) => DnsAnswer::Timeout,
            Err(RecvTimeoutError::Disconnected) => DnsAnswer::Unreachable,
        }
    }
}

impl RecordLookup for Resolver {
    fn mx_records(&self, domain: &str) -> DnsAnswer {
        match self.mx_lookup(domain) {
            Ok(lookup) => DnsAnswer::Records(lookup.iter().count()),
            Err(err) => classify(&err),
        }
    }

    fn address_records(&self, domain: &str) -> DnsAnswer {
        match self.lookup_ip(domain) {
            Ok(lookup) => DnsAnswer::Records(lookup.iter().count()),
            Err(err) => classify(&err),
        }
    }
}

/// Queries the name as absolute so resolver search domains are never appended.
fn fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_owned()
    } else {
        format!("{domain}.")
    }
}

/// Sorts a resolver error into the answer it stands for.
pub(crate) fn classify(err: &ResolveError) -> DnsAnswer {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => DnsAnswer::NotFound,
        ResolveErrorKind::Timeout => DnsAnswer::Timeout,
        ResolveErrorKind::NoConnections => DnsAnswer::Unreachable,
        ResolveErrorKind::Io(io_err) => classify_io(io_err.kind()),
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => DnsAnswer::Timeout,
            ProtoErrorKind::Io(io_err) => classify_io(io_err.kind()),
            _ => DnsAnswer::NotFound,
        },
        _ => DnsAnswer::NotFound,
    }
}

fn classify_io(kind: io::ErrorKind) -> DnsAnswer {
    match kind {
        io::ErrorKind::ConnectionRefused => DnsAnswer::Unreachable,
        io::ErrorKind::TimedOut => DnsAnswer::Timeout,
        _ => DnsAnswer::NotFound,
    }
}
