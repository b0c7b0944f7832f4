use super::*;

use super::Anchor::*;
use super::MetricKind::*;
use super::Report::*;

pub static FIELDS: [FieldDescriptor; Field::COUNT] = [
    // PMD stats
    FieldDescriptor::new(
        Field::MissWithSuccessUpcall,
        "ovsdp_miss_with_success_upcall",
        "Cache miss with successful upcall",
        Counter,
        PmdStats,
        "miss with success upcall",
        Colon,
    ),
    FieldDescriptor::new(
        Field::MissWithFailedUpcall,
        "ovsdp_miss_with_failed_upcall",
        "Cache miss with failed upcall",
        Counter,
        PmdStats,
        "miss with failed upcall",
        Colon,
    ),
    FieldDescriptor::new(
        Field::AvgSubtableLookupsMegaflow,
        "ovsdp_avg_subtable_lookups_megaflow",
        "Average of subtable lookups per megaflow hit",
        Gauge,
        PmdStats,
        "avg. subtable lookups per megaflow hit",
        Colon,
    ),
    FieldDescriptor::new(
        Field::ProcessingCycles,
        "ovsdp_processing_cycles",
        "CPU cycles spent actively checking for packets in a loop",
        Gauge,
        PmdStats,
        "processing cycles",
        Percent,
    ),
    FieldDescriptor::new(
        Field::IdleCycles,
        "ovsdp_idle_cycles",
        "Idle cycles waiting for packets",
        Gauge,
        PmdStats,
        "idle cycles",
        Percent,
    ),
    // drop reasons
    FieldDescriptor::new(
        Field::UpcallDrops,
        "ovsdp_datapath_drop_upcall_error",
        "Drop packet due to error in the Upcall process",
        Counter,
        Coverage,
        "datapath_drop_upcall_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::UpcallDropsLockError,
        "ovsdp_datapath_drop_lock_error",
        "Drop packet due to Upcall lock contention",
        Counter,
        Coverage,
        "datapath_drop_lock_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::RxDropsInvalidPacket,
        "ovsdp_datapath_drop_rx_invalid_packet",
        "Drop invalid packet having size lower than what wrote in the Ethernet header",
        Counter,
        Coverage,
        "datapath_drop_rx_invalid_packet",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropMeter,
        "ovsdp_datapath_drop_meter",
        "Drop packet in the OpenFlow (1.3+) Meter Table",
        Counter,
        Coverage,
        "datapath_drop_meter",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropUserspaceActionError,
        "ovsdp_datapath_drop_userspace_action_error",
        "Drop packet due to generic error executing the action",
        Counter,
        Coverage,
        "datapath_drop_userspace_action_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropTunnelPushError,
        "ovsdp_datapath_drop_tunnel_push_error",
        "Drop packet due to error executing the tunnel push (aka encapsulation) action",
        Counter,
        Coverage,
        "datapath_drop_tunnel_push_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropTunnelPopError,
        "ovsdp_datapath_drop_tunnel_pop_error",
        "Drop packet due to error executing the tunnel pop (aka decapsulation) action",
        Counter,
        Coverage,
        "datapath_drop_tunnel_pop_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropRecircError,
        "ovsdp_datapath_drop_recirc_error",
        "Drop packet due to error in the recirculation (this can also happen in the tunnel pop action)",
        Counter,
        Coverage,
        "datapath_drop_recirc_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropInvalidPort,
        "ovsdp_datapath_drop_invalid_port",
        "Drop packet due to invalid port",
        Counter,
        Coverage,
        "datapath_drop_invalid_port",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropInvalidTnlPort,
        "ovsdp_datapath_drop_invalid_tnl_port",
        "Drop packet due to invalid tunnel port executing the pop action",
        Counter,
        Coverage,
        "datapath_drop_invalid_tnl_port",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropSampleError,
        "ovsdp_datapath_drop_sample_error",
        "Drop packet due to sampling error",
        Counter,
        Coverage,
        "datapath_drop_sample_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropNshDecapError,
        "ovsdp_datapath_drop_nsh_decap_error",
        "Drop packet due to invalid NSH pop (aka decapsulation)",
        Counter,
        Coverage,
        "datapath_drop_nsh_decap_error",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionOfPipeline,
        "ovsdp_drop_action_of_pipeline",
        "Drop packet due to pipeline errors, e.g., error parsing datapath actions",
        Counter,
        Coverage,
        "drop_action_of_pipeline",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionBridgeNotFound,
        "ovsdp_drop_action_bridge_not_found",
        "Drop packet due to bridge not found but, at time of translation, existing",
        Counter,
        Coverage,
        "drop_action_bridge_not_found",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionRecursionTooDeep,
        "ovsdp_drop_action_recursion_too_deep",
        "Drop packet due to too many translations, system limit to protect from excessive time/space usage",
        Counter,
        Coverage,
        "drop_action_recursion_too_deep",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionTooManyResubmit,
        "ovsdp_drop_action_too_many_resubmit",
        "Drop packet due to too many resubmitted, system limit to protect from excessive time/space usage",
        Counter,
        Coverage,
        "drop_action_too_many_resubmit",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionStackTooDeep,
        "ovsdp_drop_action_stack_too_deep",
        "Drop packet due to the stack consuming more than 64 kB, system limit to protect from excessive time/space usage",
        Counter,
        Coverage,
        "drop_action_stack_too_deep",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionNoRecirculationContext,
        "ovsdp_drop_action_no_recirculation_context",
        "Drop packet due to missing recirculation context",
        Counter,
        Coverage,
        "drop_action_no_recirculation_context",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionRecirculationConflict,
        "ovsdp_drop_action_recirculation_conflict",
        "Drop packet due to conflict in the recirculation",
        Counter,
        Coverage,
        "drop_action_recirculation_conflict",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionTooManyMplsLabels,
        "ovsdp_drop_action_too_many_mpls_labels",
        "Drop packet due to MPLS pop action can't be performed as it has more labels than supported (in OVS 2.13 up to 3)",
        Counter,
        Coverage,
        "drop_action_too_many_mpls_labels",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionInvalidTunnelMetadata,
        "ovsdp_drop_action_invalid_tunnel_metadata",
        "Drop packet due to invalid GENEVE tunnel metadata",
        Counter,
        Coverage,
        "drop_action_invalid_tunnel_metadata",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionUnsupportedPacketType,
        "ovsdp_drop_action_unsupported_packet_type",
        "Drop packet due to unsupported packet type (e.g. Ethernet VLAN encapsulation)",
        Counter,
        Coverage,
        "drop_action_unsupported_packet_type",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionCongestion,
        "ovsdp_drop_action_congestion",
        "Drop packet due to congestion ECN (Explicit Congestion Notification) mismatch",
        Counter,
        Coverage,
        "drop_action_congestion",
        Total,
    ),
    FieldDescriptor::new(
        Field::DropActionForwardingDisabled,
        "ovsdp_drop_action_forwarding_disabled",
        "Drop packet when forwarding for a port is disabled (e.g. when port is admin down)",
        Counter,
        Coverage,
        "drop_action_forwarding_disabled",
        Total,
    ),
    // newer drop reasons
    FieldDescriptor::new(
        Field::NetdevVxlanTsoDrops,
        "ovsdp_netdev_vxlan_tso_drops",
        "Drop packet due to VXLAN TSO (TCP Segmentation Offload) issues",
        Counter,
        Coverage,
        "netdev_vxlan_tso_drops",
        Total,
    ),
    FieldDescriptor::new(
        Field::NetdevGeneveTsoDrops,
        "ovsdp_netdev_geneve_tso_drops",
        "Drop packet due to Geneve TSO (TCP Segmentation Offload) issues",
        Counter,
        Coverage,
        "netdev_geneve_tso_drops",
        Total,
    ),
    FieldDescriptor::new(
        Field::NetdevPushHeaderDrops,
        "ovsdp_netdev_push_header_drops",
        "Drop packet due to push header errors",
        Counter,
        Coverage,
        "netdev_push_header_drops",
        Total,
    ),
    FieldDescriptor::new(
        Field::NetdevSoftSegDrops,
        "ovsdp_netdev_soft_seg_drops",
        "Drop packet due to soft segmentation issues",
        Counter,
        Coverage,
        "netdev_soft_seg_drops",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropTunnelTsoRecirc,
        "ovsdp_datapath_drop_tunnel_tso_recirc",
        "Drop packet due to tunnel TSO recirculation errors",
        Counter,
        Coverage,
        "datapath_drop_tunnel_tso_recirc",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropInvalidBond,
        "ovsdp_datapath_drop_invalid_bond",
        "Drop packet due to invalid bond configuration",
        Counter,
        Coverage,
        "datapath_drop_invalid_bond",
        Total,
    ),
    FieldDescriptor::new(
        Field::DatapathDropHwMissRecover,
        "ovsdp_datapath_drop_hw_miss_recover",
        "Drop packet due to hardware miss recovery failure",
        Counter,
        Coverage,
        "datapath_drop_hw_miss_recover",
        Total,
    ),
    // DOCA offload
    FieldDescriptor::new(
        Field::OvsDocaNoMark,
        "ovsdp_ovs_doca_no_mark",
        "Number of packets dropped due to missing mark in OVS-DOCA",
        Counter,
        Coverage,
        "ovs_doca_no_mark",
        Total,
    ),
    FieldDescriptor::new(
        Field::OvsDocaInvalidClassifyPort,
        "ovsdp_ovs_doca_invalid_classify_port",
        "Number of packets dropped due to invalid classify port in OVS-DOCA",
        Counter,
        Coverage,
        "ovs_doca_invalid_classify_port",
        Total,
    ),
    FieldDescriptor::new(
        Field::DocaQueueEmpty,
        "ovsdp_doca_queue_empty",
        "Number of packets dropped due to empty DOCA queue",
        Counter,
        Coverage,
        "doca_queue_empty",
        Total,
    ),
    FieldDescriptor::new(
        Field::DocaQueueNoneProcessed,
        "ovsdp_doca_queue_none_processed",
        "Number of packets dropped due to no DOCA queue processed",
        Counter,
        Coverage,
        "doca_queue_none_processed",
        Total,
    ),
    FieldDescriptor::new(
        Field::DocaResizeBlock,
        "ovsdp_doca_resize_block",
        "Number of packets dropped due to DOCA resize block",
        Counter,
        Coverage,
        "doca_resize_block",
        Total,
    ),
    FieldDescriptor::new(
        Field::DocaPipeResize,
        "ovsdp_doca_pipe_resize",
        "Number of packets dropped due to DOCA pipe resize",
        Counter,
        Coverage,
        "doca_pipe_resize",
        Total,
    ),
    FieldDescriptor::new(
        Field::DocaPipeResizeOver10Ms,
        "ovsdp_doca_pipe_resize_over_10_ms",
        "Number of packets dropped due to DOCA pipe resize over 10ms",
        Counter,
        Coverage,
        "doca_pipe_resize_over_10_ms",
        Total,
    ),
];
