//! Row queries mapping session tables into domain records
//!
//! The relational joins live here so the domain model only ever sees flat
//! records: devices carry their names, chainers carry their category names,
//! routes carry both endpoint category names.

use patchbook_core::domain::{ClusterCategory, DeviceRecord, LabelRecord, RouteRecord};

use super::{Result, SessionStore};

impl SessionStore {
    /// Rack devices joined to their names.
    pub async fn devices(&self) -> Result<Vec<DeviceRecord>> {
        let rows = sqlx::query_as::<_, (i64, i64, Option<String>)>(
            r#"
            SELECT d.io_bank, d.assign, dn.name
            FROM device d
            LEFT JOIN device_name dn ON dn.mac = d.mac
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(io_bank, assign, name)| DeviceRecord {
                io_bank,
                assign,
                name: name.unwrap_or_default(),
            })
            .collect())
    }

    /// Channel label rows from every snapshot; the label index filters to
    /// the baseline configuration itself.
    pub async fn labels(&self) -> Result<Vec<LabelRecord>> {
        let rows = sqlx::query_as::<_, (i64, String, i64, Option<String>)>(
            r#"
            SELECT sc.snapshot_id, ct.name, o.obj_index, sc.name
            FROM snapshot_chainer sc
            JOIN object o ON o.id = sc.chainer_id
            JOIN cluster_type ct ON ct.id = o.obj_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(snapshot_id, category, channel_index, label)| LabelRecord {
                snapshot_id,
                category: ClusterCategory::from_name(&category),
                channel_index,
                label: label.unwrap_or_default(),
            })
            .collect())
    }

    /// Route rows with both endpoint categories resolved to names.
    ///
    /// The ORDER BY repeats dst_channel_index instead of tie-breaking on
    /// dst_cluster_type_index; report row order depends on this, so it is
    /// kept as-is and pinned down by an integration test.
    pub async fn routes(&self) -> Result<Vec<RouteRecord>> {
        let rows = sqlx::query_as::<_, (String, i64, i64, String, i64, i64, i64)>(
            r#"
            SELECT sct.name, r.src_cluster_type_index, r.src_channel_index,
                   dct.name, r.dst_cluster_type_index, r.dst_channel_index,
                   r.dst_section_index
            FROM routes r
            JOIN cluster_type sct ON sct.id = r.src_cluster_type
            JOIN cluster_type dct ON dct.id = r.dst_cluster_type
            ORDER BY r.dst_cluster_type, r.dst_channel_index, r.dst_channel_index
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(
                    src_category,
                    src_type_index,
                    src_channel_index,
                    dst_category,
                    dst_type_index,
                    dst_channel_index,
                    dst_section_index,
                )| RouteRecord {
                    src_category: ClusterCategory::from_name(&src_category),
                    src_type_index,
                    src_channel_index,
                    dst_category: ClusterCategory::from_name(&dst_category),
                    dst_type_index,
                    dst_channel_index,
                    dst_section_index,
                },
            )
            .collect())
    }
}
