use crate::models::Viewing;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Append-only, in-memory record of scheduled viewings.
///
/// Lives for the process lifetime. Clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct ViewingRegister {
    entries: Arc<RwLock<Vec<Viewing>>>,
}

impl ViewingRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a viewing and return the new register size. Duplicates are kept.
    pub async fn schedule(&self, viewing: Viewing) -> usize {
        let mut entries = self.entries.write().await;
        entries.push(viewing);
        entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of every viewing in insertion order.
    pub async fn list(&self) -> Vec<Viewing> {
        self.entries.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyId;

    fn viewing(property_id: &str) -> Viewing {
        Viewing {
            property_id: PropertyId::Text(property_id.to_string()),
            user_name: "A".to_string(),
            user_email: "a@x.com".to_string(),
            viewing_time: "2024-01-01T10:00".to_string(),
        }
    }

    #[tokio::test]
    async fn schedule_appends_in_order() {
        let register = ViewingRegister::new();
        assert!(register.is_empty().await);

        assert_eq!(register.schedule(viewing("p1")).await, 1);
        assert_eq!(register.schedule(viewing("p2")).await, 2);

        let all = register.list().await;
        assert_eq!(all[0], viewing("p1"));
        assert_eq!(all[1], viewing("p2"));
    }

    #[tokio::test]
    async fn identical_viewings_are_not_deduplicated() {
        let register = ViewingRegister::new();
        for _ in 0..3 {
            register.schedule(viewing("p1")).await;
        }
        assert_eq!(register.len().await, 3);
    }

    #[tokio::test]
    async fn concurrent_appends_are_all_kept() {
        let register = ViewingRegister::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let register = register.clone();
                tokio::spawn(async move { register.schedule(viewing(&format!("p{}", i))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(register.len().await, 32);
    }
}
