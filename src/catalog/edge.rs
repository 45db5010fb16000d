//! Domains that apply to edges and edge endpoints.

domain_table! {
    /// Edge `style` values.
    pub enum EdgeStyle {
        Dashed => "dashed",
        Dotted => "dotted",
        Solid => "solid",
        Invis => "invis",
        Bold => "bold",
        Tapered => "tapered",
    }
}

domain_table! {
    /// Primitive arrow shapes for `arrowhead` and `arrowtail`.
    pub enum ArrowType {
        Normal => "normal",
        Inv => "inv",
        Dot => "dot",
        InvDot => "invdot",
        ODot => "odot",
        InvODot => "invodot",
        None => "none",
        Tee => "tee",
        Empty => "empty",
        InvEmpty => "invempty",
        Diamond => "diamond",
        ODiamond => "odiamond",
        EDiamond => "ediamond",
        Crow => "crow",
        Box => "box",
        OBox => "obox",
        Open => "open",
        HalfOpen => "halfopen",
        Vee => "vee",
    }
}

domain_table! {
    /// Edge `dir` values: which ends of an edge get an arrowhead.
    pub enum DirType {
        Forward => "forward",
        Back => "back",
        Both => "both",
        None => "none",
    }
}

domain_table! {
    /// Compass points for `headport` and `tailport`.
    pub enum CompassPoint {
        North => "n",
        NorthEast => "ne",
        East => "e",
        SouthEast => "se",
        South => "s",
        SouthWest => "sw",
        West => "w",
        NorthWest => "nw",
        Center => "c",
    }
}
