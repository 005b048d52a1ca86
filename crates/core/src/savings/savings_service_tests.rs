#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::income::{Income, IncomeRepositoryTrait, NewIncome};
    use crate::savings::savings_model::{
        NewSavingsGoal, SavingsGoal, SavingsGoalChanges, SavingsGoalCreate, SavingsGoalPatch,
    };
    use crate::savings::savings_service::SavingsGoalService;
    use crate::savings::savings_traits::{SavingsGoalRepositoryTrait, SavingsGoalServiceTrait};
    use crate::utils::today;
    use chrono::{NaiveDate, NaiveDateTime, Utc};
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    struct MockIncomeRepository {
        incomes: Arc<Mutex<Vec<Income>>>,
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

    struct MockSavingsGoalRepository {
        goals: Arc<Mutex<Vec<SavingsGoal>>>,
        failing_ids: Mutex<HashSet<String>>,
    }

    impl MockSavingsGoalRepository {
        fn fail_progress_for(&self, goal_id: &str) {
            self.failing_ids.lock().unwrap().insert(goal_id.to_string());
        }
    }

    impl SavingsGoalRepositoryTrait for MockSavingsGoalRepository {
        fn load_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
            let goals = self.goals.lock().unwrap();
            let mut rows: Vec<SavingsGoal> = goals
                .iter()
                .filter(|g| g.user_id == user_id)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.priority.cmp(&a.priority));
            Ok(rows)
        }

        fn load_active_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
            let goals = self.goals.lock().unwrap();
            let mut rows: Vec<SavingsGoal> = goals
                .iter()
                .filter(|g| g.user_id == user_id && g.is_active)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.priority.cmp(&a.priority));
            Ok(rows)
        }

        fn find_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
            let goals = self.goals.lock().unwrap();
            goals
                .iter()
                .find(|g| g.user_id == user_id && g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::NotFound("savings goal".to_string()))
        }

        fn insert_new_goal(&self, new_goal: NewSavingsGoal) -> Result<SavingsGoal> {
            let mut goals = self.goals.lock().unwrap();
            let now = Utc::now().naive_utc();
            let row = SavingsGoal {
                id: format!("goal-{}", goals.len() + 1),
                user_id: new_goal.user_id,
                goal_name: new_goal.goal_name,
                target_amount: new_goal.target_amount,
                current_amount: new_goal.current_amount,
                target_date: new_goal.target_date,
                description: new_goal.description,
                allocation_type: new_goal.allocation_type,
                allocation_value: new_goal.allocation_value,
                frequency: new_goal.frequency,
                color: new_goal.color,
                priority: new_goal.priority,
                is_active: new_goal.is_active,
                is_completed: new_goal.is_completed,
                created_at: new_goal.created_at.unwrap_or(now),
                updated_at: new_goal.updated_at.unwrap_or(now),
            };
            goals.push(row.clone());
            Ok(row)
        }

        fn update_goal(
            &self,
            user_id: &str,
            goal_id: &str,
            changes: SavingsGoalChanges,
        ) -> Result<SavingsGoal> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .iter_mut()
                .find(|g| g.user_id == user_id && g.id == goal_id)
                .ok_or_else(|| Error::NotFound("savings goal".to_string()))?;

            if let Some(name) = changes.goal_name {
                goal.goal_name = name;
            }
            if let Some(target) = changes.target_amount {
                goal.target_amount = target;
            }
            if let Some(current) = changes.current_amount {
                goal.current_amount = current;
            }
            if let Some(date) = changes.target_date {
                goal.target_date = Some(date);
            }
            if let Some(description) = changes.description {
                goal.description = Some(description);
            }
            if let Some(allocation_type) = changes.allocation_type {
                goal.allocation_type = allocation_type;
            }
            if let Some(value) = changes.allocation_value {
                goal.allocation_value = value;
            }
            if let Some(frequency) = changes.frequency {
                goal.frequency = frequency;
            }
            if let Some(color) = changes.color {
                goal.color = color;
            }
            if let Some(priority) = changes.priority {
                goal.priority = priority;
            }
            if let Some(completed) = changes.is_completed {
                goal.is_completed = completed;
            }
            if let Some(updated) = changes.updated_at {
                goal.updated_at = updated;
            }
            Ok(goal.clone())
        }

        fn set_progress(
            &self,
            user_id: &str,
            goal_id: &str,
            current: f64,
            completed: bool,
            updated: NaiveDateTime,
        ) -> Result<usize> {
            if self.failing_ids.lock().unwrap().contains(goal_id) {
                return Err(Error::Unexpected("simulated progress failure".to_string()));
            }

            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .iter_mut()
                .find(|g| g.user_id == user_id && g.id == goal_id);
            match goal {
                Some(goal) => {
                    goal.current_amount = current;
                    goal.is_completed = completed;
                    goal.updated_at = updated;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn set_active(
            &self,
            user_id: &str,
            goal_id: &str,
            active: bool,
            updated: NaiveDateTime,
        ) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .iter_mut()
                .find(|g| g.user_id == user_id && g.id == goal_id);
            match goal {
                Some(goal) => {
                    goal.is_active = active;
                    goal.updated_at = updated;
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            let before = goals.len();
            goals.retain(|g| !(g.user_id == user_id && g.id == goal_id));
            Ok(before - goals.len())
        }
    }

    fn setup() -> (
        SavingsGoalService,
        Arc<MockSavingsGoalRepository>,
        Arc<Mutex<Vec<Income>>>,
    ) {
        let goal_repo = Arc::new(MockSavingsGoalRepository {
            goals: Arc::new(Mutex::new(Vec::new())),
            failing_ids: Mutex::new(HashSet::new()),
        });
        let incomes = Arc::new(Mutex::new(Vec::new()));
        let income_repo = Arc::new(MockIncomeRepository {
            incomes: incomes.clone(),
        });
        let service = SavingsGoalService::new(goal_repo.clone(), income_repo);
        (service, goal_repo, incomes)
    }

    fn goal_input(name: &str, target: f64) -> SavingsGoalCreate {
        SavingsGoalCreate {
            goal_name: name.to_string(),
            target_amount: target,
            current_amount: 0.0,
            target_date: None,
            description: None,
            allocation_type: "percentage".to_string(),
            allocation_value: 10.0,
            frequency: "monthly".to_string(),
            color: None,
            priority: 0,
        }
    }

    fn seed_month_income(incomes: &Arc<Mutex<Vec<Income>>>, amount: f64) {
        let mut incomes = incomes.lock().unwrap();
        let next_id = incomes.len() + 1;
        incomes.push(Income {
            id: format!("income-{}", next_id),
            user_id: "user-1".to_string(),
            source: "Acme Corp".to_string(),
            amount,
            income_date: today(),
            category: "salary".to_string(),
            description: None,
            is_recurring: false,
            is_hourly: false,
            hourly_rate: None,
            hours_worked: None,
            created_at: Utc::now().naive_utc(),
        });
    }

    #[tokio::test]
    async fn percentage_goal_receives_its_share_of_income() {
        let (service, repo, _) = setup();
        let monthly = service
            .create_goal("user-1", goal_input("Vacation", 5000.0))
            .await
            .unwrap();
        let mut overall_input = goal_input("Buffer", 5000.0);
        overall_input.frequency = "overall".to_string();
        let overall = service.create_goal("user-1", overall_input).await.unwrap();

        service
            .allocate_from_income("user-1", 1000.0, today())
            .await
            .unwrap();

        let monthly = repo.find_goal("user-1", &monthly.id).unwrap();
        let overall = repo.find_goal("user-1", &overall.id).unwrap();
        assert!((monthly.current_amount - 100.0).abs() < 1e-9);
        // Overall goals are funded manually, never by the engine
        assert!((overall.current_amount - 0.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn fixed_goal_receives_its_flat_amount() {
        let (service, repo, _) = setup();
        let mut input = goal_input("Car", 8000.0);
        input.allocation_type = "fixed".to_string();
        input.allocation_value = 250.0;
        let goal = service.create_goal("user-1", input).await.unwrap();

        service
            .allocate_from_income("user-1", 1000.0, today())
            .await
            .unwrap();

        let goal = repo.find_goal("user-1", &goal.id).unwrap();
        assert!((goal.current_amount - 250.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn paused_goals_are_skipped_by_the_engine() {
        let (service, repo, _) = setup();
        let goal = service
            .create_goal("user-1", goal_input("Vacation", 5000.0))
            .await
            .unwrap();
        service.toggle_goal("user-1", &goal.id).await.unwrap();

        service
            .allocate_from_income("user-1", 1000.0, today())
            .await
            .unwrap();

        let goal = repo.find_goal("user-1", &goal.id).unwrap();
        assert!(!goal.is_active);
        assert!((goal.current_amount - 0.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn contribution_crossing_the_target_latches_completion() {
        let (service, repo, _) = setup();
        let goal = service
            .create_goal("user-1", goal_input("Emergency Fund", 100.0))
            .await
            .unwrap();

        service
            .allocate_from_income("user-1", 1200.0, today())
            .await
            .unwrap();

        let goal = repo.find_goal("user-1", &goal.id).unwrap();
        assert!((goal.current_amount - 120.0).abs() < 1e-9);
        assert!(goal.is_completed);
    }

    #[tokio::test]
    async fn completion_survives_a_manual_reduction_below_target() {
        let (service, _, _) = setup();
        let goal = service
            .create_goal("user-1", goal_input("Emergency Fund", 100.0))
            .await
            .unwrap();
        service.contribute("user-1", &goal.id, 150.0).await.unwrap();

        let patch = SavingsGoalPatch {
            current_amount: Some(40.0),
            ..Default::default()
        };
        let updated = service.update_goal("user-1", &goal.id, patch).await.unwrap();

        assert!((updated.current_amount - 40.0).abs() < 1e-9);
        assert!(updated.is_completed);

        // And later contributions keep the latch set
        let after = service.contribute("user-1", &goal.id, 5.0).await.unwrap();
        assert!(after.is_completed);
    }

    #[tokio::test]
    async fn manual_contribution_must_be_positive() {
        let (service, _, _) = setup();
        let goal = service
            .create_goal("user-1", goal_input("Vacation", 5000.0))
            .await
            .unwrap();

        assert!(service.contribute("user-1", &goal.id, 0.0).await.is_err());
        assert!(service.contribute("user-1", &goal.id, -10.0).await.is_err());
    }

    #[tokio::test]
    async fn one_failing_goal_does_not_abort_the_batch() {
        let (service, repo, _) = setup();
        let mut first = goal_input("First", 1000.0);
        first.priority = 2;
        let first = service.create_goal("user-1", first).await.unwrap();
        let mut second = goal_input("Second", 1000.0);
        second.priority = 1;
        let second = service.create_goal("user-1", second).await.unwrap();
        repo.fail_progress_for(&first.id);

        service
            .allocate_from_income("user-1", 1000.0, today())
            .await
            .unwrap();

        let first = repo.find_goal("user-1", &first.id).unwrap();
        let second = repo.find_goal("user-1", &second.id).unwrap();
        assert!((first.current_amount - 0.0).abs() < 1e-9);
        assert!((second.current_amount - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn percentage_outside_range_is_rejected() {
        let (service, _, _) = setup();
        let mut input = goal_input("Vacation", 5000.0);
        input.allocation_value = 120.0;
        assert!(service.create_goal("user-1", input).await.is_err());

        let mut input = goal_input("Vacation", 5000.0);
        input.allocation_value = -5.0;
        assert!(service.create_goal("user-1", input).await.is_err());

        let mut input = goal_input("Vacation", 5000.0);
        input.frequency = "weekly".to_string();
        assert!(service.create_goal("user-1", input).await.is_err());
    }

    #[tokio::test]
    async fn list_summary_counts_every_goal_as_saved_money() {
        let (service, _, incomes) = setup();
        seed_month_income(&incomes, 2000.0);

        let active = service
            .create_goal("user-1", goal_input("Vacation", 1000.0))
            .await
            .unwrap();
        service.contribute("user-1", &active.id, 300.0).await.unwrap();

        let mut paused_input = goal_input("Dormant", 1000.0);
        paused_input.current_amount = 200.0;
        let paused = service.create_goal("user-1", paused_input).await.unwrap();
        service.toggle_goal("user-1", &paused.id).await.unwrap();

        let response = service.get_goals_with_summary("user-1").unwrap();
        let summary = response.summary;

        assert_eq!(summary.active_goals, 1);
        assert!((summary.total_currently_saved - 500.0).abs() < 1e-9);
        assert!((summary.total_target_amount - 2000.0).abs() < 1e-9);
        assert!((summary.overall_progress_percentage - 25.0).abs() < 1e-9);
        // 10% of this month's 2000 income, for the one active monthly goal
        assert!((summary.total_monthly_allocation - 200.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn overall_goal_projection_shows_the_amount_still_needed() {
        let (service, _, incomes) = setup();
        seed_month_income(&incomes, 2000.0);

        let mut input = goal_input("House", 10000.0);
        input.frequency = "overall".to_string();
        input.current_amount = 4000.0;
        service.create_goal("user-1", input).await.unwrap();

        let response = service.get_goals_with_summary("user-1").unwrap();
        let view = &response.goals[0];

        assert!((view.calculated_allocation - 6000.0).abs() < 1e-9);
        assert!((view.progress - 40.0).abs() < 1e-9);
        assert!((view.remaining - 6000.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn paused_goal_projection_is_zero() {
        let (service, _, incomes) = setup();
        seed_month_income(&incomes, 2000.0);

        let goal = service
            .create_goal("user-1", goal_input("Vacation", 5000.0))
            .await
            .unwrap();
        service.toggle_goal("user-1", &goal.id).await.unwrap();

        let response = service.get_goals_with_summary("user-1").unwrap();
        assert!((response.goals[0].calculated_allocation - 0.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn empty_goal_list_reports_zero_progress() {
        let (service, _, _) = setup();
        let response = service.get_goals_with_summary("user-1").unwrap();
        assert!((response.summary.overall_progress_percentage - 0.0).abs() < 1e-9);
        assert!(response.goals.is_empty());
    }

    #[tokio::test]
    async fn deleting_a_foreign_goal_reports_not_found() {
        let (service, _, _) = setup();
        let goal = service
            .create_goal("user-1", goal_input("Vacation", 5000.0))
            .await
            .unwrap();

        let result = service.delete_goal("user-2", &goal.id).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
