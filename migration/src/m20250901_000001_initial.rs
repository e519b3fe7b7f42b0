use sea_orm_migration::prelude::*;

/// Tours (une tournée regroupe les dates de concert)
#[derive(DeriveIden)]
enum Tours {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

/// Events (dates de concert, chaque event appartient à une tournée)
#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    TourId,
    City,
    Venue,
    EventDate,
    EndDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

/// Participants (inscriptions au jeu-concours, rattachées à un event)
#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
    Nom,
    Prenom,
    Email,
    DateNaissance,
    EventId,
    CreatedAt,
    UpdatedAt,
}

/// Users (comptes back-office)
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    IsAdmin,
    CreatedAt,
    UpdatedAt,
}

/// Tirages (au plus un tirage par event, contrainte d'unicité)
#[derive(DeriveIden)]
enum Tirages {
    Table,
    Id,
    EventId,
    NombreVainqueur,
    DateTirage,
    CreatedAt,
    UpdatedAt,
}

/// Vainqueurs (résultat réalisé d'un tirage, rang dense 1..N)
#[derive(DeriveIden)]
enum Vainqueurs {
    Table,
    Id,
    TirageId,
    ParticipantId,
    PrenomParticipant,
    NomParticipant,
    Email,
    Rang,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tournées
        manager
            .create_table(
                Table::create()
                    .table(Tours::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tours::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tours::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Tours::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Tours::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // Événements
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::TourId).uuid().not_null())
                    .col(ColumnDef::new(Events::City).string_len(255).not_null())
                    .col(ColumnDef::new(Events::Venue).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Events::EventDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Events::Status)
                            .string_len(32)
                            .not_null()
                            .default("upcoming"),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_events_tour")
                    .table(Events::Table)
                    .col(Events::TourId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Events::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_event_tour")
                            .from_tbl(Events::Table)
                            .from_col(Events::TourId)
                            .to_tbl(Tours::Table)
                            .to_col(Tours::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Participants
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Participants::Nom).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Participants::Prenom)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Participants::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Participants::DateNaissance).date().not_null())
                    .col(ColumnDef::new(Participants::EventId).uuid().not_null())
                    .col(
                        ColumnDef::new(Participants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Participants::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_participants_event")
                    .table(Participants::Table)
                    .col(Participants::EventId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Participants::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_participant_event")
                            .from_tbl(Participants::Table)
                            .from_col(Participants::EventId)
                            .to_tbl(Events::Table)
                            .to_col(Events::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Comptes back-office
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Tirages
        manager
            .create_table(
                Table::create()
                    .table(Tirages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tirages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tirages::EventId).uuid().not_null())
                    .col(
                        ColumnDef::new(Tirages::NombreVainqueur)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tirages::DateTirage)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tirages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Tirages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        // Un seul tirage par event: l'invariant est porté par le schéma,
        // pas uniquement par la logique applicative.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tirages_event_unique")
                    .table(Tirages::Table)
                    .col(Tirages::EventId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Tirages::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_tirage_event")
                            .from_tbl(Tirages::Table)
                            .from_col(Tirages::EventId)
                            .to_tbl(Events::Table)
                            .to_col(Events::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Vainqueurs
        manager
            .create_table(
                Table::create()
                    .table(Vainqueurs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vainqueurs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vainqueurs::TirageId).uuid().not_null())
                    .col(ColumnDef::new(Vainqueurs::ParticipantId).uuid().not_null())
                    .col(
                        ColumnDef::new(Vainqueurs::PrenomParticipant)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vainqueurs::NomParticipant)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vainqueurs::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Vainqueurs::Rang).integer().not_null())
                    .col(
                        ColumnDef::new(Vainqueurs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vainqueurs_tirage")
                    .table(Vainqueurs::Table)
                    .col(Vainqueurs::TirageId)
                    .to_owned(),
            )
            .await?;

        // Rang dense et unique au sein d'un tirage
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_vainqueurs_tirage_rang_unique")
                    .table(Vainqueurs::Table)
                    .col(Vainqueurs::TirageId)
                    .col(Vainqueurs::Rang)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ON DELETE CASCADE: un re-tirage supprime les anciens vainqueurs
        // dans la même transaction, jamais de lignes orphelines.
        manager
            .alter_table(
                Table::alter()
                    .table(Vainqueurs::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_vainqueur_tirage")
                            .from_tbl(Vainqueurs::Table)
                            .from_col(Vainqueurs::TirageId)
                            .to_tbl(Tirages::Table)
                            .to_col(Tirages::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ordre inverse des dépendances
        manager
            .drop_table(Table::drop().if_exists().table(Vainqueurs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Tirages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(Participants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Tours::Table).to_owned())
            .await?;

        Ok(())
    }
}
