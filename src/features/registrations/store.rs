use tokio::sync::RwLock;

use crate::features::registrations::models::ClientInfo;

/// In-memory, append-only list of confirmed registrations.
///
/// Records keep their insertion order and are never updated or removed.
#[derive(Debug, Default)]
pub struct RegistrationStore {
    records: RwLock<Vec<ClientInfo>>,
}

impl RegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the promotion's sample participants
    pub fn with_sample_data() -> Self {
        Self {
            records: RwLock::new(sample_clients()),
        }
    }

    pub async fn append(&self, client: ClientInfo) {
        self.records.write().await.push(client);
    }

    /// Snapshot of all records in insertion order
    pub async fn list(&self) -> Vec<ClientInfo> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

fn sample_clients() -> Vec<ClientInfo> {
    vec![
        ClientInfo::new("Anna", "anna@gmail.com", "+12 (34) 56-78-9", "7.08, Bachata", true),
        ClientInfo::new(
            "Roma Sh.",
            "roman.sharikov@gmail.com",
            "+12 (34) 24-18-4",
            "9.08, Strength training",
            false,
        ),
        ClientInfo::new(
            "Mikhail Kapitanov",
            "mimisha@gmail.com",
            "+12 (34) 66-44-6",
            "9.08, Strength training",
            true,
        ),
        ClientInfo::new("Marusya", "m.svekla@gmail.com", "+12 (34) 14-94-5", "13.08, Zumba", true),
        ClientInfo::new(
            "Liliya Svekla",
            "l.svekla@gmail.com",
            "+12 (34) 99-21-1",
            "13.08, Zumba",
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::features::registrations::validator::validation_errors;

    #[test]
    fn test_append_keeps_insertion_order() {
        tokio_test::block_on(async {
            let store = RegistrationStore::new();
            let clients: Vec<ClientInfo> = (0..5)
                .map(|i| {
                    ClientInfo::new(
                        format!("Client {i}"),
                        format!("client{i}@example.com"),
                        format!("+1 555 000{i}"),
                        "13.08, Zumba",
                        i % 2 == 0,
                    )
                })
                .collect();

            for client in &clients {
                store.append(client.clone()).await;
            }

            assert_eq!(store.list().await, clients);
            assert_eq!(store.len().await, 5);
        });
    }

    #[test]
    fn test_new_store_is_empty() {
        tokio_test::block_on(async {
            let store = RegistrationStore::new();
            assert!(store.list().await.is_empty());
        });
    }

    #[test]
    fn test_sample_data_is_valid() {
        tokio_test::block_on(async {
            let store = RegistrationStore::with_sample_data();
            let clients = store.list().await;

            assert_eq!(clients.len(), 5);
            assert_eq!(clients[0].name, "Anna");
            assert_eq!(clients[4].name, "Liliya Svekla");
            for client in &clients {
                assert!(validation_errors(client).is_empty());
            }
        });
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(RegistrationStore::new());

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let client = ClientInfo::new(
                        format!("Client {i}"),
                        "client@example.com",
                        "123",
                        "",
                        false,
                    );
                    store.append(client).await;
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
    }
}
