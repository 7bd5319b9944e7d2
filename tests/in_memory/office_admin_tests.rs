//! Admin console and team chat over a shared staff directory.

use super::helpers::{Office, office};
use eyre::ensure;
use rstest::rstest;
use staffnet::admin::domain::AuditAction;
use staffnet::staff::domain::AccessLevel;
use staffnet::task::services::CreateTaskRequest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn promotion_grants_task_creation(office: Office) -> eyre::Result<()> {
    let admin = office.open().await?;
    let sam = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;

    office.act_as(&sam)?;
    let refused = office
        .tasks
        .create(CreateTaskRequest::new("Plan the rota", sam.id()))
        .await;
    ensure!(
        refused.as_ref().is_err_and(|err| err.is_unauthorized()),
        "staff should not create tasks, got {refused:?}"
    );

    office.act_as(&admin)?;
    let promoted = office
        .admin
        .change_access_level(sam.id(), AccessLevel::Manager)
        .await?;

    office.act_as(&promoted)?;
    let task = office
        .tasks
        .create(CreateTaskRequest::new("Plan the rota", sam.id()))
        .await?;
    ensure!(task.assigned_to() == sam.id());

    office.act_as(&admin)?;
    let actions: Vec<AuditAction> = office
        .admin
        .recent_audit_entries(10)
        .await?
        .iter()
        .map(|entry| entry.action())
        .collect();
    ensure!(
        actions
            == vec![
                AuditAction::AccessLevelChanged {
                    staff_id: sam.id(),
                    from: AccessLevel::Staff,
                    to: AccessLevel::Manager,
                },
                AuditAction::StaffAdded {
                    staff_id: sam.id(),
                    access_level: AccessLevel::Staff,
                },
            ],
        "unexpected audit trail {actions:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn banned_member_disappears_from_active_list(office: Office) -> eyre::Result<()> {
    office.open().await?;
    let sam = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;

    let banned = office.admin.ban(sam.id()).await?;
    ensure!(banned.is_banned());
    ensure!(
        !office
            .directory
            .list_active()
            .await?
            .iter()
            .any(|member| member.id() == sam.id()),
        "banned member should be hidden from the active list"
    );
    ensure!(office.directory.list_all().await?.len() == 2);

    office.admin.unban(sam.id()).await?;
    ensure!(office.directory.list_active().await?.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_chat_keeps_send_order(office: Office) -> eyre::Result<()> {
    let admin = office.open().await?;
    let sam = office
        .hire("Sam Staff", "sam@staffnet.test", AccessLevel::Staff)
        .await?;

    office.chat.send("Morning all").await?;
    office.act_as(&sam)?;
    office.chat.send("  Morning!  ").await?;
    office.act_as(&admin)?;
    office.chat.send("Stand-up in five").await?;

    let history = office.chat.history(2).await?;
    let lines: Vec<(_, &str)> = history
        .iter()
        .map(|message| (message.sender_id(), message.content().as_str()))
        .collect();
    ensure!(
        lines == vec![(sam.id(), "Morning!"), (admin.id(), "Stand-up in five")],
        "unexpected history {lines:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn maintenance_mode_round_trips(office: Office) -> eyre::Result<()> {
    office.open().await?;
    ensure!(!office.admin.maintenance_mode().await?);

    office.admin.set_maintenance_mode(true).await?;
    ensure!(office.admin.maintenance_mode().await?);

    let latest = office.admin.recent_audit_entries(1).await?;
    ensure!(
        latest.first().map(|entry| entry.action())
            == Some(AuditAction::MaintenanceModeChanged { enabled: true })
    );
    Ok(())
}
