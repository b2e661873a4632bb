use articled::db::{Database, StoreError};
use articled::models::*;
use speculate2::speculate;
use uuid::Uuid;

fn create_test_article(db: &Database, title: &str, content: &str) -> Article {
    db.create_article(ArticleFields {
        title: Some(title.to_string()),
        content: Some(content.to_string()),
    })
    .expect("Failed to create article")
}

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "open" {
        it "creates parent directories for the database file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("nested").join("articled.db");

            let on_disk = Database::open(path.clone()).expect("Failed to open database");
            on_disk.migrate().expect("Failed to migrate");

            assert!(path.exists());
        }
    }

    describe "create_article" {
        it "creates an article with the whitelisted fields" {
            let article = create_test_article(&db, "My Article", "Some content");

            assert_eq!(article.title, Some("My Article".to_string()));
            assert_eq!(article.content, Some("Some content".to_string()));
            assert_eq!(article.created_at, article.updated_at);
        }

        it "accepts absent title and content" {
            let article = db.create_article(ArticleFields::default())
                .expect("Failed to create article");

            assert!(article.title.is_none());
            assert!(article.content.is_none());
        }

        it "assigns a unique id per article" {
            let first = create_test_article(&db, "A", "a");
            let second = create_test_article(&db, "B", "b");

            assert_ne!(first.id, second.id);
        }

        it "rejects a title longer than 255 characters" {
            let result = db.create_article(ArticleFields {
                title: Some("a".repeat(256)),
                content: None,
            });

            match result {
                Err(StoreError::Validation(errors)) => {
                    assert_eq!(
                        errors.messages("title"),
                        vec!["is too long (maximum is 255 characters)".to_string()]
                    );
                }
                other => panic!("Expected validation error, got {:?}", other),
            }
        }

        it "rejects content longer than 65535 characters" {
            let result = db.create_article(ArticleFields {
                title: None,
                content: Some("a".repeat(65_536)),
            });

            match result {
                Err(StoreError::Validation(errors)) => {
                    assert_eq!(errors.messages("content").len(), 1);
                }
                other => panic!("Expected validation error, got {:?}", other),
            }
        }

        it "collects errors for every invalid field" {
            let result = db.create_article(ArticleFields {
                title: Some("a".repeat(256)),
                content: Some("a".repeat(65_536)),
            });

            match result {
                Err(StoreError::Validation(errors)) => {
                    assert!(!errors.messages("title").is_empty());
                    assert!(!errors.messages("content").is_empty());
                }
                other => panic!("Expected validation error, got {:?}", other),
            }
        }
    }

    describe "get_article" {
        it "returns NotFound for a non-existent id" {
            let result = db.get_article(Uuid::new_v4());
            assert!(matches!(result, Err(StoreError::NotFound)));
        }

        it "returns the article by id" {
            let created = create_test_article(&db, "Findable", "Body");

            let found = db.get_article(created.id).expect("Query failed");
            assert_eq!(found.id, created.id);
            assert_eq!(found.title, Some("Findable".to_string()));
        }
    }

    describe "list_articles" {
        it "returns an empty list when no articles exist" {
            let articles = db.list_articles().expect("Query failed");
            assert!(articles.is_empty());
        }

        it "returns every stored article" {
            create_test_article(&db, "One", "first");
            create_test_article(&db, "Two", "second");

            let articles = db.list_articles().expect("Query failed");
            assert_eq!(articles.len(), 2);
        }
    }

    describe "update_article" {
        it "changes only the supplied fields" {
            let created = create_test_article(&db, "Old", "Untouched");

            let updated = db.update_article(created.id, ArticleFields {
                title: Some("New".to_string()),
                content: None,
            }).expect("Failed to update");

            assert_eq!(updated.title, Some("New".to_string()));
            assert_eq!(updated.content, Some("Untouched".to_string()));
            assert_eq!(updated.created_at, created.created_at);
        }

        it "returns NotFound for a non-existent id" {
            let result = db.update_article(Uuid::new_v4(), ArticleFields {
                title: Some("X".to_string()),
                content: None,
            });

            assert!(matches!(result, Err(StoreError::NotFound)));
        }

        it "leaves the row untouched when validation fails" {
            let created = create_test_article(&db, "Fine", "Body");

            let result = db.update_article(created.id, ArticleFields {
                title: Some("a".repeat(256)),
                content: None,
            });
            assert!(matches!(result, Err(StoreError::Validation(_))));

            let stored = db.get_article(created.id).expect("Query failed");
            assert_eq!(stored.title, Some("Fine".to_string()));
        }
    }

    describe "delete_article" {
        it "removes the article permanently" {
            let created = create_test_article(&db, "Doomed", "Body");

            db.delete_article(created.id).expect("Failed to delete");

            let result = db.get_article(created.id);
            assert!(matches!(result, Err(StoreError::NotFound)));
        }

        it "returns NotFound for a non-existent id" {
            let result = db.delete_article(Uuid::new_v4());
            assert!(matches!(result, Err(StoreError::NotFound)));
        }
    }

    describe "seed" {
        it "inserts the fixed articles plus the requested count" {
            let inserted = db.seed(3).expect("Failed to seed");

            assert_eq!(inserted, 5);
            let articles = db.list_articles().expect("Query failed");
            assert_eq!(articles.len(), 5);

            let titles: Vec<_> = articles.iter().filter_map(|a| a.title.clone()).collect();
            assert!(titles.contains(&"First Article".to_string()));
            assert!(titles.contains(&"Second Article".to_string()));
        }

        it "duplicates the fixed articles on repeat runs" {
            db.seed(0).expect("Failed to seed");
            db.seed(0).expect("Failed to seed");

            let articles = db.list_articles().expect("Query failed");
            assert_eq!(articles.len(), 4);
        }
    }
}
