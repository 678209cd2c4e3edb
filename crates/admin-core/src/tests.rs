//! Managed-List Controller Tests
//!
//! Runs the controller against an in-memory collection that counts calls
//! and can be told to fail.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;

    use crate::error::{ListError, NetworkError, UploadError};
    use crate::list::{ListConfig, ManagedList, Phase};
    use crate::record::Record;
    use crate::records::{Course, Question, RecordId};
    use crate::remote::{RemoteCollection, UploadFile};

    struct MemoryCollection<T> {
        rows: RefCell<Vec<T>>,
        assign_id: fn(&mut T, RecordId),
        next_id: Cell<RecordId>,
        calls: Cell<usize>,
        lists: Cell<usize>,
        fail: Cell<bool>,
        /// Fail `list` only; mutations still go through
        fail_lists: Cell<bool>,
        /// Phase of the list under test, sampled while `list` runs
        seen: RefCell<Vec<Phase>>,
        observe: RefCell<Option<Rc<dyn Fn() -> Phase>>>,
        imported: RefCell<Vec<String>>,
    }

    impl<T> MemoryCollection<T> {
        fn new(rows: Vec<T>, assign_id: fn(&mut T, RecordId)) -> Self {
            Self {
                next_id: Cell::new(rows.len() as RecordId + 1),
                rows: RefCell::new(rows),
                assign_id,
                calls: Cell::new(0),
                lists: Cell::new(0),
                fail: Cell::new(false),
                fail_lists: Cell::new(false),
                seen: RefCell::new(Vec::new()),
                observe: RefCell::new(None),
                imported: RefCell::new(Vec::new()),
            }
        }

        fn hit(&self, method: &'static str) -> Result<(), NetworkError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                return Err(NetworkError::Status {
                    method,
                    url: "memory".into(),
                    status: 500,
                });
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl<T: Record<Id = RecordId>> RemoteCollection<T> for Rc<MemoryCollection<T>> {
        async fn list(&self) -> Result<Vec<T>, NetworkError> {
            if let Some(observe) = self.observe.borrow().as_ref() {
                self.seen.borrow_mut().push(observe());
            }
            tokio::task::yield_now().await;
            self.hit("GET")?;
            if self.fail_lists.get() {
                return Err(NetworkError::Transport {
                    method: "GET",
                    url: "memory".into(),
                    reason: "connection reset".into(),
                });
            }
            self.lists.set(self.lists.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        async fn find_by(&self, field: &str, value: &str) -> Result<Vec<T>, NetworkError> {
            self.hit("GET")?;
            Ok(self
                .rows
                .borrow()
                .iter()
                .filter(|r| r.field(field).as_deref() == Some(value))
                .cloned()
                .collect())
        }

        async fn create(&self, record: &T) -> Result<T, NetworkError> {
            self.hit("POST")?;
            let mut created = record.clone();
            (self.assign_id)(&mut created, self.next_id.get());
            self.next_id.set(self.next_id.get() + 1);
            self.rows.borrow_mut().push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: RecordId, record: &T) -> Result<T, NetworkError> {
            self.hit("PUT")?;
            let mut rows = self.rows.borrow_mut();
            let row = rows
                .iter_mut()
                .find(|r| r.id() == Some(id))
                .ok_or(NetworkError::Status {
                    method: "PUT",
                    url: "memory".into(),
                    status: 404,
                })?;
            *row = record.clone();
            (self.assign_id)(row, id);
            Ok(row.clone())
        }

        async fn delete(&self, id: RecordId) -> Result<(), NetworkError> {
            self.hit("DELETE")?;
            self.rows.borrow_mut().retain(|r| r.id() != Some(id));
            Ok(())
        }

        async fn upload(&self, file: UploadFile) -> Result<(), UploadError> {
            let name = file.name.clone();
            self.hit("POST")
                .map_err(|source| UploadError::Rejected { file_name: name, source })?;
            self.imported.borrow_mut().push(file.name);
            Ok(())
        }
    }

    type CourseList = ManagedList<Course, Rc<MemoryCollection<Course>>>;

    fn course(id: RecordId, name: &str, code: &str) -> Course {
        Course {
            id: Some(id),
            name: name.into(),
            code: code.into(),
            description: format!("{} course", name),
            schedule: "2024-12-15".into(),
        }
    }

    fn sample() -> Vec<Course> {
        vec![course(1, "React Basics", "R1"), course(2, "Advanced JS", "A1")]
    }

    fn setup(rows: Vec<Course>) -> (Rc<MemoryCollection<Course>>, CourseList) {
        let remote = Rc::new(MemoryCollection::new(rows, |c: &mut Course, id| c.id = Some(id)));
        let list = ManagedList::new(remote.clone(), ListConfig::for_resource::<Course>(10));
        (remote, list)
    }

    fn ids(items: &[Course]) -> Vec<RecordId> {
        items.iter().filter_map(|c| c.id).collect()
    }

    fn row(list: &CourseList, id: RecordId) -> Option<Course> {
        list.collection().into_iter().find(|c| c.id == Some(id))
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let (remote, list) = setup(sample());
        assert!(list.collection().is_empty());

        let loaded = list.load().await.expect("load failed");
        assert_eq!(ids(&loaded), vec![1, 2]);
        assert_eq!(ids(&list.visible()), vec![1, 2]);

        remote.rows.borrow_mut().pop();
        list.load().await.expect("second load failed");
        assert_eq!(ids(&list.collection()), vec![1]);
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_search_then_clear() {
        let (_remote, list) = setup(sample());
        list.load().await.unwrap();

        list.set_search_text("react");
        assert_eq!(ids(&list.visible()), vec![1]);

        list.set_search_text("");
        assert_eq!(ids(&list.visible()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_matches_any_configured_field() {
        let (_remote, list) = setup(sample());
        list.load().await.unwrap();

        list.set_search_text("a1");
        assert_eq!(ids(&list.visible()), vec![2]);

        // schedule is not a search field
        list.set_search_text("2024-12");
        assert!(list.visible().is_empty());
    }

    #[tokio::test]
    async fn test_visible_is_subset_of_collection() {
        let rows: Vec<Course> = (1..=30)
            .map(|i| course(i, &format!("Course {}", i), &format!("C{}", i % 4)))
            .collect();
        let (_remote, list) = setup(rows);
        list.load().await.unwrap();

        for text in ["", "c1", "COURSE 2", "zzz", "3"] {
            list.set_search_text(text);
            let collection = list.collection();
            let needle = text.to_lowercase();
            for item in list.visible() {
                assert!(collection.contains(&item));
                assert!(
                    item.name.to_lowercase().contains(&needle)
                        || item.code.to_lowercase().contains(&needle)
                        || item.description.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[tokio::test]
    async fn test_filter_changes_reset_page() {
        let rows: Vec<Course> = (1..=25).map(|i| course(i, "Course", "C")).collect();
        let (_remote, list) = setup(rows);
        list.load().await.unwrap();

        list.set_page(2);
        assert_eq!(list.page_window().index, 2);
        assert_eq!(list.page_items().len(), 5);

        list.set_search_text("course");
        assert_eq!(list.page_window().index, 0);

        list.set_page(1);
        list.set_search_keys(Rc::new(|c: &Course| vec![c.code.clone()]));
        assert_eq!(list.page_window().index, 0);
    }

    #[tokio::test]
    async fn test_page_size_resets_and_page_clamps() {
        let rows: Vec<Course> = (1..=12).map(|i| course(i, "Course", "C")).collect();
        let (_remote, list) = setup(rows);
        list.load().await.unwrap();

        list.set_page(1);
        list.set_page_size(5);
        assert_eq!(list.page_window().index, 0);
        assert_eq!(list.page_count(), 3);

        list.set_page(40);
        assert_eq!(list.page_window().index, 2);
        assert_eq!(ids(&list.page_items()), vec![11, 12]);
    }

    #[tokio::test]
    async fn test_create_with_blank_field_sends_nothing() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();
        let calls = remote.calls.get();

        let draft = Course {
            name: "".into(),
            code: "X".into(),
            description: "d".into(),
            schedule: "2025-01-01".into(),
            ..Default::default()
        };
        let err = list.create(&draft).await.unwrap_err();
        match err {
            ListError::Validation(v) => assert_eq!(v.missing, vec!["name"]),
            other => panic!("expected validation error, got {other:?}"),
        }

        let err = list.update(1, &draft).await.unwrap_err();
        assert!(matches!(err, ListError::Validation(_)));

        assert_eq!(remote.calls.get(), calls);
        assert_eq!(ids(&list.collection()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_then_list_contains_new_id() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();
        let lists = remote.lists.get();

        let created = list
            .create(&Course {
                name: "Rust".into(),
                code: "RS".into(),
                description: "Systems".into(),
                schedule: "2025-02-01".into(),
                ..Default::default()
            })
            .await
            .expect("create failed");

        assert_eq!(created.value.id, Some(3));
        assert!(created.is_synced());
        assert_eq!(remote.lists.get(), lists + 1);
        assert!(ids(&list.collection()).contains(&3));
    }

    #[tokio::test]
    async fn test_update_reloads() {
        let (_remote, list) = setup(sample());
        list.load().await.unwrap();

        let mut edited = row(&list, 2).expect("row 2");
        edited.name = "Modern JS".into();
        list.update(2, &edited).await.expect("update failed");

        assert_eq!(row(&list, 2).unwrap().name, "Modern JS");
    }

    #[tokio::test]
    async fn test_remove_then_list_excludes_id() {
        let (_remote, list) = setup(sample());
        list.load().await.unwrap();
        list.set_search_text("react");
        assert_eq!(ids(&list.visible()), vec![1]);

        list.remove(1).await.expect("remove failed");
        assert_eq!(ids(&list.collection()), vec![2]);
        assert!(list.visible().is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_collection() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();

        remote.fail.set(true);
        let err = list.load().await.unwrap_err();
        assert!(matches!(err, ListError::Network(NetworkError::Status { status: 500, .. })));
        assert_eq!(ids(&list.collection()), vec![1, 2]);
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_draft() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();

        list.open_draft(None);
        list.edit_draft(|c| {
            c.name = "Go".into();
            c.code = "GO".into();
            c.description = "Gophers".into();
            c.schedule = "2025-03-01".into();
        });
        assert!(list.draft_missing().is_empty());

        remote.fail.set(true);
        assert!(list.save_draft().await.is_err());
        assert_eq!(list.draft().map(|d| d.name), Some("Go".to_string()));

        remote.fail.set(false);
        let saved = list.save_draft().await.expect("save failed");
        assert_eq!(saved.value.name, "Go");
        assert!(list.draft().is_none());
    }

    #[tokio::test]
    async fn test_save_existing_draft_updates() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();

        list.open_draft(row(&list, 1));
        list.edit_draft(|c| c.code = "R2".into());
        list.save_draft().await.expect("save failed");

        assert_eq!(remote.rows.borrow().len(), 2);
        assert_eq!(row(&list, 1).unwrap().code, "R2");
    }

    #[tokio::test]
    async fn test_blank_draft_reports_all_required() {
        let (_remote, list) = setup(Vec::new());
        list.open_draft(None);
        assert_eq!(
            list.draft_missing(),
            vec!["name", "code", "description", "schedule"]
        );
        list.discard_draft();
        assert!(list.draft().is_none());
    }

    #[tokio::test]
    async fn test_bulk_import_reloads() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();
        let lists = remote.lists.get();

        list.bulk_import(UploadFile::csv("courses.csv", b"name,code\nA,B\n".to_vec()))
            .await
            .expect("import failed");

        assert_eq!(*remote.imported.borrow(), vec!["courses.csv".to_string()]);
        assert_eq!(remote.lists.get(), lists + 1);
    }

    #[tokio::test]
    async fn test_failed_import_is_upload_error() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();
        remote.fail.set(true);

        let err = list
            .bulk_import(UploadFile::csv("bad.csv", b"x".to_vec()))
            .await
            .unwrap_err();
        assert!(matches!(err, ListError::Upload(UploadError::Rejected { .. })));
        assert_eq!(ids(&list.collection()), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_import_is_forwarded() {
        let (remote, list) = setup(sample());
        list.bulk_import(UploadFile::csv("empty.csv", Vec::new()))
            .await
            .expect("import failed");
        assert_eq!(*remote.imported.borrow(), vec!["empty.csv".to_string()]);
    }

    #[tokio::test]
    async fn test_phase_is_loading_while_in_flight() {
        let (remote, list) = setup(sample());
        let list = Rc::new(list);
        let watched = Rc::downgrade(&list);
        *remote.observe.borrow_mut() = Some(Rc::new(move || {
            watched.upgrade().map_or(Phase::Idle, |l| l.phase())
        }));

        let (loaded, during) = tokio::join!(list.load(), async { list.phase() });
        loaded.expect("load failed");
        assert_eq!(during, Phase::Loading);
        assert_eq!(list.phase(), Phase::Idle);

        // The reload inside a delete runs while the delete still holds Loading.
        list.remove(2).await.expect("remove failed");
        assert_eq!(*remote.seen.borrow(), vec![Phase::Loading, Phase::Loading]);
        assert_eq!(list.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_reload_failure_after_remove_is_reported() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();

        remote.fail_lists.set(true);
        let applied = list.remove(1).await.expect("delete itself succeeded");

        assert!(!applied.is_synced());
        assert!(matches!(applied.reload, Some(NetworkError::Transport { method: "GET", .. })));
        // Server dropped the row; the stale snapshot is kept until a reload works.
        assert_eq!(remote.rows.borrow().len(), 1);
        assert_eq!(ids(&list.collection()), vec![1, 2]);
        assert_eq!(list.phase(), Phase::Idle);

        remote.fail_lists.set(false);
        list.load().await.expect("reload failed");
        assert_eq!(ids(&list.collection()), vec![2]);
    }

    #[tokio::test]
    async fn test_reload_failure_after_save_still_closes_draft() {
        let (remote, list) = setup(sample());
        list.load().await.unwrap();

        list.open_draft(row(&list, 1));
        list.edit_draft(|c| c.code = "R9".into());
        remote.fail_lists.set(true);

        let applied = list.save_draft().await.expect("update itself succeeded");
        assert_eq!(applied.value.code, "R9");
        assert!(applied.reload.is_some());
        assert!(list.draft().is_none());
        assert_eq!(row(&list, 1).unwrap().code, "R1");
    }

    #[tokio::test]
    async fn test_lookup_leaves_collection() {
        let (_remote, list) = setup(sample());
        list.load().await.unwrap();

        let found = list.lookup("code", "A1").await.unwrap();
        assert_eq!(ids(&found), vec![2]);
        assert_eq!(ids(&list.collection()), vec![1, 2]);
    }

    #[test]
    fn test_entity_filter_needs_configured_field() {
        let (_remote, list) = setup(sample());
        list.set_entity_filter(Some("1".into()));
        assert_eq!(list.entity_filter(), None);
    }

    #[tokio::test]
    async fn test_entity_filter_is_orthogonal_to_search() {
        let rows = vec![
            Question {
                id: Some(1),
                question_text: "What is ownership?".into(),
                course_id: Some(3),
                ..Default::default()
            },
            Question {
                id: Some(2),
                question_text: "What is a closure?".into(),
                course_id: Some(4),
                ..Default::default()
            },
            Question {
                id: Some(3),
                question_text: "Explain borrowing".into(),
                course_id: Some(3),
                ..Default::default()
            },
        ];
        let remote = Rc::new(MemoryCollection::new(rows, |q: &mut Question, id| q.id = Some(id)));
        let list = ManagedList::new(remote, ListConfig::for_resource::<Question>(1));
        list.load().await.unwrap();

        list.set_page(2);
        list.set_entity_filter(Some("3".into()));
        assert_eq!(list.page_window().index, 0);
        assert_eq!(list.visible().iter().filter_map(|q| q.id).collect::<Vec<_>>(), vec![1, 3]);

        list.set_search_text("what");
        assert_eq!(list.visible().iter().filter_map(|q| q.id).collect::<Vec<_>>(), vec![1]);

        list.set_entity_filter(None);
        assert_eq!(list.visible().len(), 2);
        assert_eq!(list.entity_filter(), None);
    }

    #[test]
    fn test_question_config_comes_from_resource() {
        let config = ListConfig::for_resource::<Question>(0);
        assert_eq!(config.base, "questions");
        assert_eq!(config.filter_field, Some("courseId"));
        assert_eq!(config.page_size, 1);
    }
}
