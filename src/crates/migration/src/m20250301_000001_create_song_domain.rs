use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Songs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Songs::SongId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Songs::Title).string().not_null())
                    .col(ColumnDef::new(Songs::Artist).string().not_null())
                    .col(ColumnDef::new(Songs::Album).string().not_null().default(""))
                    .col(ColumnDef::new(Songs::Duration).integer().null())
                    .col(ColumnDef::new(Songs::Genre).string().not_null().default(""))
                    .col(ColumnDef::new(Songs::ReleaseYear).integer().null())
                    .col(ColumnDef::new(Songs::SpotifyId).string().not_null().default(""))
                    .col(ColumnDef::new(Songs::YoutubeUrl).string().not_null().default(""))
                    .col(
                        ColumnDef::new(Songs::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_songs_created_at")
                    .table(Songs::Table)
                    .col(Songs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Songs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Songs {
    Table,
    SongId,
    Title,
    Artist,
    Album,
    Duration,
    Genre,
    ReleaseYear,
    SpotifyId,
    YoutubeUrl,
    CreatedAt,
}
