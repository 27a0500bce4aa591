use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_systems_table::Migration),
            Box::new(m20240101_000002_create_users_table::Migration),
            Box::new(m20240101_000003_create_dead_stock_table::Migration),
            Box::new(m20240101_000004_create_complaints_table::Migration),
            Box::new(m20240101_000005_create_activity_log_table::Migration),
            Box::new(m20240101_000006_seed_default_users::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_systems_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_systems_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // system_no is assigned by the register service, not the database
            manager
                .create_table(
                    Table::create()
                        .table(Systems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Systems::SystemNo)
                                .integer()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Systems::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Systems::Quantity).integer().not_null())
                        .col(ColumnDef::new(Systems::Quality).string_len(16).not_null())
                        .col(ColumnDef::new(Systems::Status).string_len(16).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Systems::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Systems {
        Table,
        SystemNo,
        Name,
        Quantity,
        Quality,
        Status,
    }
}

mod m20240101_000002_create_users_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Username)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Users::Password).string().not_null())
                        .col(ColumnDef::new(Users::Role).string_len(16).not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Users {
        Table,
        Username,
        Password,
        Role,
    }
}

mod m20240101_000003_create_dead_stock_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_dead_stock_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DeadStock::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DeadStock::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DeadStock::SystemNo).integer().not_null())
                        .col(ColumnDef::new(DeadStock::Name).string().not_null())
                        .col(ColumnDef::new(DeadStock::Reason).string().not_null())
                        .col(ColumnDef::new(DeadStock::AcceptedBy).string().not_null())
                        .col(
                            ColumnDef::new(DeadStock::DateTime)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DeadStock::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum DeadStock {
        Table,
        Id,
        SystemNo,
        Name,
        Reason,
        AcceptedBy,
        DateTime,
    }
}

mod m20240101_000004_create_complaints_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_complaints_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Complaints::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Complaints::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Complaints::RaisedBy).string().not_null())
                        .col(ColumnDef::new(Complaints::Role).string_len(16).not_null())
                        .col(ColumnDef::new(Complaints::Title).string().not_null())
                        .col(ColumnDef::new(Complaints::Description).string().not_null())
                        .col(ColumnDef::new(Complaints::Status).string_len(16).not_null())
                        .col(
                            ColumnDef::new(Complaints::DateTime)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Complaints::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum Complaints {
        Table,
        Id,
        RaisedBy,
        Role,
        Title,
        Description,
        Status,
        DateTime,
    }
}

mod m20240101_000005_create_activity_log_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_activity_log_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ActivityLog::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ActivityLog::Id)
                                .integer()
                                .primary_key()
                                .auto_increment()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ActivityLog::Action).string_len(16).not_null())
                        .col(ColumnDef::new(ActivityLog::SystemNo).integer().not_null())
                        .col(ColumnDef::new(ActivityLog::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(ActivityLog::DateTime)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub enum ActivityLog {
        Table,
        Id,
        Action,
        SystemNo,
        Quantity,
        DateTime,
    }
}

mod m20240101_000006_seed_default_users {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000002_create_users_table::Users;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_seed_default_users"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let insert = Query::insert()
                .into_table(Users::Table)
                .columns([Users::Username, Users::Password, Users::Role])
                .values_panic(["admin".into(), "admin123".into(), "Admin".into()])
                .values_panic(["hod".into(), "hod123".into(), "HOD".into()])
                .values_panic([
                    "principal".into(),
                    "principal123".into(),
                    "Principal".into(),
                ])
                .to_owned();

            manager.exec_stmt(insert).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let delete = Query::delete().from_table(Users::Table).to_owned();
            manager.exec_stmt(delete).await
        }
    }
}
