mod report_dto;

pub use report_dto::{
    PelaporDto, ReportResponseDto, StatsResponseDto, UpdateStatusDto,
};
