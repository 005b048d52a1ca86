#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::income::income_model::{Income, IncomeCreate, NewIncome};
    use crate::income::income_service::IncomeService;
    use crate::income::income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
    use chrono::{NaiveDate, Utc};
    use std::sync::{Arc, Mutex};

    struct MockIncomeRepository {
        incomes: Arc<Mutex<Vec<Income>>>,
    }

    impl MockIncomeRepository {
        fn new() -> Self {
            Self {
                incomes: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl IncomeRepositoryTrait for MockIncomeRepository {
        fn insert_new_income(&self, new_income: NewIncome) -> Result<Income> {
            let mut incomes = self.incomes.lock().unwrap();
            let row = Income {
                id: format!("income-{}", incomes.len() + 1),
                user_id: new_income.user_id,
                source: new_income.source,
                amount: new_income.amount,
                income_date: new_income.income_date,
                category: new_income.category,
                description: new_income.description,
                is_recurring: new_income.is_recurring,
                is_hourly: new_income.is_hourly,
                hourly_rate: new_income.hourly_rate,
                hours_worked: new_income.hours_worked,
                created_at: Utc::now().naive_utc(),
            };
            incomes.push(row.clone());
            Ok(row)
        }

        fn load_incomes(
            &self,
            user_id: &str,
            range: Option<(NaiveDate, NaiveDate)>,
        ) -> Result<Vec<Income>> {
            let incomes = self.incomes.lock().unwrap();
            Ok(incomes
                .iter()
                .filter(|i| i.user_id == user_id)
                .filter(|i| match range {
                    Some((start, end)) => i.income_date >= start && i.income_date < end,
                    None => true,
                })
                .cloned()
                .collect())
        }

        fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize> {
            let mut incomes = self.incomes.lock().unwrap();
            let before = incomes.len();
            incomes.retain(|i| !(i.user_id == user_id && i.id == income_id));
            Ok(before - incomes.len())
        }
    }

    fn service() -> (IncomeService, Arc<MockIncomeRepository>) {
        let repo = Arc::new(MockIncomeRepository::new());
        (IncomeService::new(repo.clone()), repo)
    }

    fn base_input() -> IncomeCreate {
        IncomeCreate {
            source: "Acme Corp".to_string(),
            amount: Some(1000.0),
            income_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category: "salary".to_string(),
            description: None,
            is_recurring: false,
            is_hourly: false,
            hourly_rate: None,
            hours_worked: None,
        }
    }

    #[tokio::test]
    async fn hourly_income_derives_amount_and_ignores_raw_amount() {
        let (service, _) = service();
        let mut input = base_input();
        input.is_hourly = true;
        input.hourly_rate = Some(25.5);
        input.hours_worked = Some(8.0);
        input.amount = Some(999.0); // ignored for hourly entries

        let income = service.create_income("user-1", input).await.unwrap();
        assert!((income.amount - 204.0).abs() < 1e-9);
        assert_eq!(income.hourly_rate, Some(25.5));
        assert_eq!(income.hours_worked, Some(8.0));
    }

    #[tokio::test]
    async fn fixed_income_stores_raw_amount() {
        let (service, _) = service();
        let income = service.create_income("user-1", base_input()).await.unwrap();
        assert!((income.amount - 1000.0).abs() < 1e-9);
        assert_eq!(income.hourly_rate, None);
    }

    #[tokio::test]
    async fn missing_amount_is_rejected() {
        let (service, repo) = service();
        let mut input = base_input();
        input.amount = None;

        let result = service.create_income("user-1", input).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(repo.incomes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected() {
        let (service, _) = service();
        let mut input = base_input();
        input.amount = Some(0.0);
        assert!(service.create_income("user-1", input).await.is_err());
    }

    #[tokio::test]
    async fn hourly_without_hours_is_rejected() {
        let (service, _) = service();
        let mut input = base_input();
        input.is_hourly = true;
        input.hourly_rate = Some(30.0);
        input.hours_worked = None;
        assert!(service.create_income("user-1", input).await.is_err());
    }

    #[tokio::test]
    async fn blank_source_is_rejected() {
        let (service, _) = service();
        let mut input = base_input();
        input.source = "  ".to_string();
        assert!(service.create_income("user-1", input).await.is_err());
    }

    #[tokio::test]
    async fn deleting_a_foreign_income_reports_not_found() {
        let (service, _) = service();
        let income = service.create_income("user-1", base_input()).await.unwrap();

        let result = service.delete_income("user-2", &income.id).await;
        assert!(matches!(result, Err(Error::NotFound(_))));

        service.delete_income("user-1", &income.id).await.unwrap();
    }

    #[test]
    fn month_filter_rejects_malformed_month() {
        let (service, _) = service();
        assert!(service.get_incomes("user-1", Some("03-2024")).is_err());
    }
}
