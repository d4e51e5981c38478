//! Bridge client and lazy accessor registry
//!
//! The [`Client`] is the composition root for everything this crate does:
//! it owns the configuration, exactly one shared transport, and a registry
//! of resource accessors that is populated on first access. Accessors are
//! resolved through a single generic lazy-factory mechanism: a name is
//! bound to a constructor, the constructor runs once with a handle to the
//! owning client, and the instance is cached for the client's lifetime.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use std::time::Duration;

use rest_client::RestClient;

use crate::accessors::{
    Bridge, Groups, Lights, Scenes, Schedules, Sensors, TimeZones, Users,
};
use crate::command::BridgeCommand;
use crate::config::ClientConfig;
use crate::error::Result;

/// A resource accessor constructible from a client handle
///
/// The registry key is `NAME`; each name resolves to at most one instance
/// per client. Accessors hold a clone of the client handle and route every
/// operation back through it.
pub trait ResourceAccessor: Send + Sync + Sized {
    /// Registry key for this accessor; unique per accessor type
    const NAME: &'static str;

    /// Construct the accessor bound to the owning client
    fn new(client: Client) -> Self;
}

struct ClientInner {
    config: RwLock<ClientConfig>,
    transport: OnceLock<RestClient>,
    accessors: Mutex<HashMap<&'static str, Arc<dyn Any + Send + Sync>>>,
}

/// Client for a single bridge
///
/// Cheap to clone; clones share the same configuration, transport, and
/// accessor registry. Construction performs no network I/O.
///
/// # Examples
///
/// ```no_run
/// use hue_api::{Client, ClientConfig};
///
/// # async fn example() -> hue_api::Result<()> {
/// let client = Client::new(ClientConfig::new("192.168.1.10").with_username("myuser"));
///
/// let lights = client.lights().get_all().await?;
/// for light in lights {
///     println!("{}: {}", light.id, light.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// Create a client from the given configuration
    ///
    /// Does not contact the bridge; the transport is created lazily on
    /// first command invocation.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config: RwLock::new(config),
                transport: OnceLock::new(),
                accessors: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Resolve an accessor, constructing it on first access
    ///
    /// Subsequent calls for the same accessor type return the same
    /// instance (`Arc::ptr_eq` holds).
    pub fn accessor<A: ResourceAccessor + 'static>(&self) -> Arc<A> {
        let mut accessors = self
            .inner
            .accessors
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let entry = accessors.entry(A::NAME).or_insert_with(|| {
            tracing::debug!(accessor = A::NAME, "constructing accessor");
            Arc::new(A::new(self.clone())) as Arc<dyn Any + Send + Sync>
        });

        // NAME is unique per accessor type, so the stored entry is always an A.
        Arc::clone(entry)
            .downcast::<A>()
            .expect("accessor registry entry matches its registered type")
    }

    /// Bridge settings accessor
    pub fn bridge(&self) -> Arc<Bridge> {
        self.accessor()
    }

    /// Users (whitelist) accessor
    pub fn users(&self) -> Arc<Users> {
        self.accessor()
    }

    /// Lights accessor
    pub fn lights(&self) -> Arc<Lights> {
        self.accessor()
    }

    /// Groups accessor
    pub fn groups(&self) -> Arc<Groups> {
        self.accessor()
    }

    /// Schedules accessor
    pub fn schedules(&self) -> Arc<Schedules> {
        self.accessor()
    }

    /// Scenes accessor
    pub fn scenes(&self) -> Arc<Scenes> {
        self.accessor()
    }

    /// Sensors accessor
    pub fn sensors(&self) -> Arc<Sensors> {
        self.accessor()
    }

    /// Time zones accessor
    pub fn time_zones(&self) -> Arc<TimeZones> {
        self.accessor()
    }

    /// Shared transport, created on first need
    ///
    /// All accessors obtained from this client issue their requests through
    /// this one instance.
    pub fn transport(&self) -> &RestClient {
        self.inner.transport.get_or_init(RestClient::new)
    }

    /// Invoke a command against this client's transport
    ///
    /// Pure delegation: the result is exactly what `command.invoke(self)`
    /// produces, with no validation, retry, or transformation on top.
    pub async fn invoke_command<C: BridgeCommand>(&self, command: C) -> Result<C::Output> {
        command.invoke(self).await
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ClientConfig {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn host(&self) -> String {
        self.read_config(|config| config.host().to_string())
    }

    pub fn set_host(&self, host: impl Into<String>) {
        self.write_config(|config| config.set_host(host));
    }

    pub fn port(&self) -> u16 {
        self.read_config(ClientConfig::port)
    }

    pub fn set_port(&self, port: u16) {
        self.write_config(|config| config.set_port(port));
    }

    pub fn username(&self) -> Option<String> {
        self.read_config(|config| config.username().map(str::to_string))
    }

    pub fn set_username(&self, username: Option<String>) {
        self.write_config(|config| config.set_username(username));
    }

    pub fn timeout(&self) -> Duration {
        self.read_config(ClientConfig::timeout)
    }

    pub fn set_timeout(&self, timeout: Duration) {
        self.write_config(|config| config.set_timeout(timeout));
    }

    fn read_config<T>(&self, read: impl FnOnce(&ClientConfig) -> T) -> T {
        read(&self
            .inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner))
    }

    fn write_config(&self, write: impl FnOnce(&mut ClientConfig)) {
        write(
            &mut self
                .inner
                .config
                .write()
                .unwrap_or_else(PoisonError::into_inner),
        );
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(ClientConfig::new("192.168.1.10").with_username("testuser"))
    }

    #[test]
    fn test_construction_applies_defaults() {
        let client = Client::new(ClientConfig::new("192.168.1.10"));

        assert_eq!(client.host(), "192.168.1.10");
        assert_eq!(client.port(), 80);
        assert_eq!(client.username(), None);
        assert_eq!(client.timeout(), Duration::from_millis(15_000));
    }

    #[test]
    fn test_accessor_is_lazy_singleton() {
        let client = client();

        let first = client.users();
        let second = client.users();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_accessors_are_distinct_instances() {
        let client = client();

        // Same registry, different names: each resolves independently.
        let lights = client.lights();
        let groups = client.groups();

        let lights_again = client.lights();
        assert!(Arc::ptr_eq(&lights, &lights_again));
        let _ = groups;
    }

    #[test]
    fn test_transport_is_shared() {
        let client = client();

        let first = client.transport() as *const RestClient;
        let second = client.transport() as *const RestClient;

        assert_eq!(first, second);
    }

    #[test]
    fn test_clones_share_registry_and_transport() {
        let client = client();
        let clone = client.clone();

        let from_original = client.bridge();
        let from_clone = clone.bridge();

        assert!(Arc::ptr_eq(&from_original, &from_clone));
        assert_eq!(
            client.transport() as *const RestClient,
            clone.transport() as *const RestClient
        );
    }

    #[test]
    fn test_config_setters_visible_through_getters() {
        let client = client();

        client.set_host("10.0.0.2");
        client.set_port(8080);
        client.set_username(Some("other".to_string()));
        client.set_timeout(Duration::from_secs(3));

        assert_eq!(client.host(), "10.0.0.2");
        assert_eq!(client.port(), 8080);
        assert_eq!(client.username(), Some("other".to_string()));
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_config_mutation_visible_to_clones() {
        let client = client();
        let clone = client.clone();

        client.set_port(9000);

        assert_eq!(clone.port(), 9000);
    }
}
