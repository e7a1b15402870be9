//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use payments_types::{Money, PaymentId, PaymentRepository, RepoError};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn money(cents: i64) -> Money {
        Money::new(cents).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = setup_repo().await;

        let id = repo.create(money(10021)).await.unwrap();
        let payment = repo.get(id).await.unwrap();

        assert_eq!(payment.id, Some(id));
        assert_eq!(payment.amount.minor_units(), 10021);
    }

    #[tokio::test]
    async fn test_create_generates_distinct_ids() {
        let repo = setup_repo().await;

        let a = repo.create(money(1)).await.unwrap();
        let b = repo.create(money(1)).await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = setup_repo().await;

        let result = repo.get(PaymentId::new()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = setup_repo().await;

        let payments = repo.list().await.unwrap();

        assert!(payments.is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_insertion_order() {
        let repo = setup_repo().await;

        let first = repo.create(money(100)).await.unwrap();
        let second = repo.create(money(200)).await.unwrap();
        let third = repo.create(money(300)).await.unwrap();

        let ids: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();

        assert_eq!(ids, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_update_replaces_amount() {
        let repo = setup_repo().await;

        let id = repo.create(money(10021)).await.unwrap();
        repo.update(id, money(10022)).await.unwrap();

        let payment = repo.get(id).await.unwrap();
        assert_eq!(payment.amount.minor_units(), 10022);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = setup_repo().await;

        let result = repo.update(PaymentId::new(), money(1)).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup_repo().await;

        let id = repo.create(money(10021)).await.unwrap();
        repo.delete(id).await.unwrap();

        assert!(matches!(repo.get(id).await, Err(RepoError::NotFound)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = setup_repo().await;

        let id = repo.create(money(1)).await.unwrap();
        repo.delete(id).await.unwrap();

        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_check_constraint_rejects_negative_amount() {
        let repo = setup_repo().await;

        // The CHECK constraint rejects the row at the storage layer.
        let result = sqlx::query("INSERT INTO payments (id, amount) VALUES (?, -1)")
            .bind(PaymentId::new().to_string())
            .execute(repo.pool())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_backed_database() {
        let dir = std::env::temp_dir().join(format!("payments-repo-{}", PaymentId::new()));
        let url = format!("sqlite://{}/payments.db?mode=rwc", dir.display());

        let id = {
            let repo = SqliteRepo::new(&url).await.unwrap();
            repo.create(money(555)).await.unwrap()
        };

        let reopened = SqliteRepo::new(&url).await.unwrap();
        assert_eq!(reopened.get(id).await.unwrap().amount.minor_units(), 555);

        let _ = std::fs::remove_dir_all(dir);
    }
}
